//! Cache interface trait for abstracted caching operations.

use std::time::Duration;
use tracing::debug;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between in-memory, Redis, or other cache
/// backends.
///
/// Uses JSON strings for type-erased storage to maintain
/// dyn-compatibility. Absence is always signalled with `None`, never a
/// sentinel value, so cached values that are themselves empty
/// structures stay unambiguous.
pub trait Cache: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Set a raw JSON value in the cache with a TTL.
    ///
    /// Unconditionally overwrites both the value and the expiry of an
    /// existing entry (last-write-wins).
    fn set_raw(&self, key: &str, value: &str, ttl: Duration);

    /// Check if a live entry exists for a key.
    ///
    /// This is the authority on liveness: an entry past its expiry is
    /// treated as absent and removed as a side effect of the check.
    fn contains(&self, key: &str) -> bool;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    fn delete(&self, key: &str) -> bool;

    /// Remove all entries.
    fn clear(&self);
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any
/// serializable type on top of the raw string contract.
pub trait CacheExt: Cache {
    /// Get a typed value from the cache.
    ///
    /// An entry that fails to deserialize is treated as a miss.
    fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get_raw(key)?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Discarding undecodable cache entry '{}': {}", key, e);
                self.delete(key);
                None
            }
        }
    }

    /// Set a typed value in the cache.
    ///
    /// Serialization failures are logged and skipped; the caller's
    /// value is still valid without the cache write.
    fn set<T: serde::Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json, ttl),
            Err(e) => debug!("Skipping cache write for '{}': {}", key, e),
        }
    }
}

// Blanket implementation for all Cache implementations
impl<T: Cache + ?Sized> CacheExt for T {}
