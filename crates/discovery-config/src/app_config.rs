//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Cache TTL configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Dataset source configuration.
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "discovery-catalog".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Enable permissive CORS.
    pub cors_enabled: bool,
}

impl ServerConfig {
    /// Returns the socket address string to bind to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
        }
    }
}

/// Cache TTL configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL for single-resource lookups, in seconds.
    pub resource_ttl_secs: u64,
    /// TTL for listing envelopes, in seconds.
    pub list_ttl_secs: u64,
}

impl CacheConfig {
    /// TTL for single-resource lookups.
    #[must_use]
    pub const fn resource_ttl(&self) -> Duration {
        Duration::from_secs(self.resource_ttl_secs)
    }

    /// TTL for listing envelopes.
    #[must_use]
    pub const fn list_ttl(&self) -> Duration {
        Duration::from_secs(self.list_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            resource_ttl_secs: 300,
            list_ttl_secs: 60,
        }
    }
}

/// Dataset source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatasetConfig {
    /// Path to a JSON catalog file. When unset, the catalog embedded
    /// in the server binary is used.
    pub path: Option<PathBuf>,
}
