//! Main application router.

use crate::{
    controllers::{health_controller, resource_controller},
    middleware::request_log_middleware,
    responses::not_found_fallback,
    state::AppState,
};
use axum::{middleware, Router};
use discovery_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// Routes are read-only; axum's method routing answers non-GET
/// requests on known paths with `405` and the fallback renders unknown
/// paths as the standard `404` error body.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(health_controller::router())
        .nest("/resources", resource_controller::router())
        .fallback(not_found_fallback)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_log_middleware));

    info!("Router created with catalog endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
