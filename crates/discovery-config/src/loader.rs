//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use discovery_core::DiscoveryError;
use std::path::Path;
use tracing::{debug, info};

/// Loads the application configuration from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the given directory.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. Environment variables with `DISCOVERY_` prefix (`__` separator)
    ///
    /// Every section falls back to its defaults when absent, so a
    /// missing directory yields a fully defaulted configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Configuration`] when a present source
    /// is malformed.
    pub fn load(config_dir: &str) -> Result<AppConfig, DiscoveryError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("DISCOVERY_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("DISCOVERY").separator("__"));

        let config = builder
            .build()
            .map_err(|e| DiscoveryError::Configuration(e.to_string()))?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| DiscoveryError::Configuration(e.to_string()))?;
        app_config.app.environment = environment;

        Ok(app_config)
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load`].
    pub fn from_default_location() -> Result<AppConfig, DiscoveryError> {
        Self::load("./config")
    }
}
