//! Result type alias for the Discovery Catalog API.

use crate::DiscoveryError;

/// A specialized `Result` type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
