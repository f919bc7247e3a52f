//! Integration tests for the cache-aside behavior of
//! `CachedResourceRepository`.
//!
//! The pipeline itself is covered by unit tests next to the
//! implementation; these tests pin the caching policies: hit on
//! repeat, found-only caching for detail lookups, and TTL expiry.

mod common;

use common::{sample_dataset, SpyCache};
use discovery_core::{ResourceQuery, ResourceType, SortField, SortOrder};
use discovery_repository::{CacheTtl, CachedResourceRepository, ResourceRepository};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_find_all_hits_cache_on_second_call() {
    let cache = Arc::new(SpyCache::new());
    let repo = CachedResourceRepository::new(sample_dataset(), cache.clone());

    let query = ResourceQuery::new(1, 10).with_type(ResourceType::Theme);
    let first = repo.find_all(&query);
    let second = repo.find_all(&query);

    assert_eq!(first, second);
    // One population, not two
    assert_eq!(cache.set_count(), 1);
}

#[test]
fn test_find_all_identical_queries_share_an_entry_regardless_of_construction() {
    let cache = Arc::new(SpyCache::new());
    let repo = CachedResourceRepository::new(sample_dataset(), cache.clone());

    let a = ResourceQuery::new(1, 10)
        .with_type(ResourceType::Theme)
        .sorted_by(SortField::DownloadCount, SortOrder::Asc);
    let b = ResourceQuery::new(1, 10)
        .sorted_by(SortField::DownloadCount, SortOrder::Asc)
        .with_type(ResourceType::Theme);

    let first = repo.find_all(&a);
    let second = repo.find_all(&b);

    assert_eq!(first, second);
    assert_eq!(cache.set_count(), 1);

    // Byte-identical envelopes, not just structurally equal ones
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_different_page_or_limit_is_a_different_entry() {
    let cache = Arc::new(SpyCache::new());
    let repo = CachedResourceRepository::new(sample_dataset(), cache.clone());

    repo.find_all(&ResourceQuery::new(1, 10));
    repo.find_all(&ResourceQuery::new(2, 10));
    repo.find_all(&ResourceQuery::new(1, 20));

    assert_eq!(cache.set_count(), 3);
}

#[test]
fn test_find_by_id_caches_found_results_only() {
    let cache = Arc::new(SpyCache::new());
    let repo = CachedResourceRepository::new(sample_dataset(), cache.clone());

    assert!(repo.find_by_id("a").is_some());
    assert!(repo.find_by_id("a").is_some());
    assert_eq!(cache.set_count(), 1);

    // Misses are never cached: both lookups go back to the dataset
    // and neither writes an entry.
    assert!(repo.find_by_id("ghost").is_none());
    assert!(repo.find_by_id("ghost").is_none());
    assert_eq!(cache.set_count(), 1);
    assert_eq!(cache.miss_count("discovery:cache:resource:ghost"), 2);
}

#[test]
fn test_expired_list_entry_is_recomputed() {
    let cache = Arc::new(SpyCache::new());
    let ttl = CacheTtl {
        resource: Duration::from_secs(300),
        list: Duration::from_millis(1),
    };
    let repo = CachedResourceRepository::with_ttl(sample_dataset(), cache.clone(), ttl);

    let query = ResourceQuery::default();
    repo.find_all(&query);
    std::thread::sleep(Duration::from_millis(10));
    repo.find_all(&query);

    assert_eq!(cache.set_count(), 2);
}

#[test]
fn test_count_is_uncached() {
    let cache = Arc::new(SpyCache::new());
    let repo = CachedResourceRepository::new(sample_dataset(), cache.clone());

    assert_eq!(repo.count(), 3);
    assert_eq!(repo.count(), 3);
    assert_eq!(cache.set_count(), 0);
}
