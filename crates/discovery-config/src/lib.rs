//! # Discovery Config
//!
//! Layered configuration for the Discovery Catalog API: TOML files
//! plus `DISCOVERY_`-prefixed environment variable overrides.

mod app_config;
mod loader;

pub use app_config::{AppConfig, AppMetadata, CacheConfig, DatasetConfig, ServerConfig};
pub use loader::ConfigLoader;
