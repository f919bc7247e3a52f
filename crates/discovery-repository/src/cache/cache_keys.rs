//! Cache key generators for consistent key naming.

use discovery_core::ResourceQuery;
use sha2::{Digest, Sha256};

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "discovery:cache";

/// Generate a cache key for a resource by ID.
#[must_use]
pub fn resource_by_id(id: &str) -> String {
    format!("{}:resource:{}", CACHE_PREFIX, id)
}

/// Generate a cache key for a resource listing.
///
/// The key embeds a fingerprint of the full query, so every distinct
/// combination of filters, sorting, and pagination gets its own entry.
#[must_use]
pub fn resource_list(query: &ResourceQuery) -> String {
    format!("{}:resources:{}", CACHE_PREFIX, query_fingerprint(query))
}

/// Deterministic fingerprint of a query.
///
/// The query is serialized through `serde_json::Value`, whose object
/// map keeps keys sorted, so two logically equal queries hash
/// identically no matter how they were constructed. The canonical
/// bytes are then SHA-256 hashed and hex-encoded.
#[must_use]
pub fn query_fingerprint(query: &ResourceQuery) -> String {
    let canonical = serde_json::to_value(query)
        .and_then(|value| serde_json::to_string(&value))
        .unwrap_or_default();

    let digest = Sha256::digest(canonical.as_bytes());
    format!("{:x}", digest)
}
