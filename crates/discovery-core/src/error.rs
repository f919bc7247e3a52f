//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Discovery Catalog API.
///
/// Every variant maps to an HTTP status code and a machine-readable
/// error code so the REST layer can translate errors mechanically.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error (rejected request parameter)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset failed to load or failed its integrity checks.
    /// Fatal at startup; never raised while serving.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiscoveryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::DataSource(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                500
            }
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a data source error.
    #[must_use]
    pub fn data_source<T: Into<String>>(message: T) -> Self {
        Self::DataSource(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body for log scrapers
    pub status: u16,
}

impl ErrorResponse {
    /// Creates a new error response from a `DiscoveryError`.
    #[must_use]
    pub fn from_error(error: &DiscoveryError) -> Self {
        Self {
            error: error.error_code().to_string(),
            message: error.to_string(),
            status: error.status_code(),
        }
    }
}

impl From<&DiscoveryError> for ErrorResponse {
    fn from(error: &DiscoveryError) -> Self {
        Self::from_error(error)
    }
}
