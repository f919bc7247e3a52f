//! # Discovery Catalog Server
//!
//! Main entry point for the Discovery Catalog API: loads
//! configuration and the catalog dataset, composes the cache and
//! repository, and serves the REST router.

use discovery_config::{AppConfig, ConfigLoader};
use discovery_core::DiscoveryResult;
use discovery_repository::{
    cache::MemoryCache, CacheTtl, CachedResourceRepository, Dataset, ResourceRepository,
};
use discovery_rest::{create_router, AppState};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Catalog shipped with the binary, used when no dataset path is
/// configured.
const EMBEDDED_CATALOG: &str = include_str!("../data/resources.json");

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Discovery Catalog Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> DiscoveryResult<()> {
    let config = ConfigLoader::from_default_location()?;
    info!("Environment: {}", config.app.environment);

    // A dataset that fails to load aborts startup; serving an empty or
    // partial catalog silently is worse than not starting.
    let dataset = load_dataset(&config)?;
    info!("Catalog loaded with {} resources", dataset.len());

    let cache = Arc::new(MemoryCache::new());
    let ttl = CacheTtl {
        resource: config.cache.resource_ttl(),
        list: config.cache.list_ttl(),
    };
    let repository: Arc<dyn ResourceRepository> =
        Arc::new(CachedResourceRepository::with_ttl(dataset, cache, ttl));

    let state = AppState::new(repository);
    let router = create_router(state, &config.server);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| discovery_core::DiscoveryError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| discovery_core::DiscoveryError::internal(format!("Server error: {}", e)))?;

    info!("Server shut down");
    Ok(())
}

fn load_dataset(config: &AppConfig) -> DiscoveryResult<Dataset> {
    match &config.dataset.path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Dataset::load(path)
        }
        None => {
            info!("Loading embedded catalog");
            Dataset::from_json(EMBEDDED_CATALOG)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
