//! In-memory cache implementation.

use super::Cache;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// Process-local in-memory cache with per-entry TTLs.
///
/// Expiry is lazy: entries past their TTL are removed when a read or
/// liveness check touches them, never by a background sweep. The map
/// is mutex-guarded because concurrent requests may race to populate
/// the same key; that race is benign since every write is a pure
/// recomputation and `set_raw` overwrites.
#[derive(Default)]
pub struct MemoryCache {
    store: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, including not-yet-collected
    /// expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if no entries are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

impl Cache for MemoryCache {
    fn get_raw(&self, key: &str) -> Option<String> {
        let mut store = self.store.lock();
        match store.get(key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                store.remove(key);
                debug!("Cache miss (expired) for key '{}'", key);
                None
            }
            Some(entry) => {
                debug!("Cache hit for key '{}'", key);
                Some(entry.value.clone())
            }
            None => {
                debug!("Cache miss for key '{}'", key);
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str, ttl: Duration) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.store.lock().insert(key.to_string(), entry);
        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
    }

    fn contains(&self, key: &str) -> bool {
        let mut store = self.store.lock();
        match store.get(key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                store.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn delete(&self, key: &str) -> bool {
        self.store.lock().remove(key).is_some()
    }

    fn clear(&self) {
        self.store.lock().clear();
    }
}
