//! Common test infrastructure for repository integration tests.

use chrono::{TimeZone, Utc};
use discovery_core::{Platform, Resource, ResourceType};
use discovery_repository::cache::{Cache, MemoryCache};
use discovery_repository::Dataset;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// The three-resource catalog used across the integration tests.
pub fn sample_dataset() -> Dataset {
    let resource = |id: &str, t: ResourceType, p: Platform, dl: u64, ts: i64| Resource {
        id: id.to_string(),
        name: id.to_string(),
        resource_type: t,
        platform: p,
        download_count: dl,
        updated_at: Utc.timestamp_opt(ts, 0).unwrap(),
        extra: serde_json::Map::new(),
    };

    Dataset::from_resources(vec![
        resource("a", ResourceType::Theme, Platform::All, 5, 1_000),
        resource("b", ResourceType::Plugin, Platform::Windows, 10, 2_000),
        resource("c", ResourceType::Theme, Platform::Linux, 1, 3_000),
    ])
    .expect("sample dataset is valid")
}

/// A real `MemoryCache` that additionally counts writes and misses,
/// so tests can assert how often the repository recomputed.
#[derive(Default)]
pub struct SpyCache {
    inner: MemoryCache,
    sets: Mutex<u64>,
    misses: Mutex<HashMap<String, u64>>,
}

impl SpyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self) -> u64 {
        *self.sets.lock()
    }

    pub fn miss_count(&self, key: &str) -> u64 {
        self.misses.lock().get(key).copied().unwrap_or(0)
    }
}

impl Cache for SpyCache {
    fn get_raw(&self, key: &str) -> Option<String> {
        let value = self.inner.get_raw(key);
        if value.is_none() {
            *self.misses.lock().entry(key.to_string()).or_insert(0) += 1;
        }
        value
    }

    fn set_raw(&self, key: &str, value: &str, ttl: Duration) {
        *self.sets.lock() += 1;
        self.inner.set_raw(key, value, ttl);
    }

    fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.delete(key)
    }

    fn clear(&self) {
        self.inner.clear();
    }
}
