//! Cache-aside repository implementation over the static dataset.

use crate::cache::{cache_keys, Cache, CacheExt};
use crate::{Dataset, ResourceRepository};
use discovery_core::{Resource, ResourceList, ResourceQuery, SortField, SortOrder};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// TTLs for the two classes of cached reads.
///
/// Single-resource lookups change rarely and cache longer; listings
/// are cheap to recompute and cache briefly. Both are per call site,
/// not a property of the cache itself.
#[derive(Debug, Clone, Copy)]
pub struct CacheTtl {
    /// TTL for `find_by_id` entries.
    pub resource: Duration,
    /// TTL for `find_all` envelopes.
    pub list: Duration,
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            resource: Duration::from_secs(300),
            list: Duration::from_secs(60),
        }
    }
}

/// Repository serving reads from the in-memory dataset behind a
/// cache-aside layer.
///
/// The dataset is the source of truth; the cache only ever holds
/// values recomputable from it, so racing populations of one key are
/// harmless.
pub struct CachedResourceRepository {
    dataset: Dataset,
    cache: Arc<dyn Cache>,
    ttl: CacheTtl,
}

impl CachedResourceRepository {
    /// Creates a repository over a loaded dataset with default TTLs.
    #[must_use]
    pub fn new(dataset: Dataset, cache: Arc<dyn Cache>) -> Self {
        Self::with_ttl(dataset, cache, CacheTtl::default())
    }

    /// Creates a repository with explicit TTLs.
    #[must_use]
    pub fn with_ttl(dataset: Dataset, cache: Arc<dyn Cache>, ttl: CacheTtl) -> Self {
        Self {
            dataset,
            cache,
            ttl,
        }
    }

    fn scan(&self, id: &str) -> Option<Resource> {
        self.dataset.iter().find(|r| r.id == id).cloned()
    }

    /// Runs the filter → total → sort → paginate pipeline.
    ///
    /// The order is load-bearing: `total` is captured after filtering
    /// but before pagination, so `meta.total` reflects the whole
    /// filtered set regardless of `page`/`limit`.
    fn run_query(&self, query: &ResourceQuery) -> ResourceList {
        let mut matches: Vec<&Resource> = self
            .dataset
            .iter()
            .filter(|r| query.resource_type.map_or(true, |t| r.resource_type == t))
            .filter(|r| query.platform.map_or(true, |p| r.platform.matches(p)))
            .collect();

        let total = matches.len() as u64;

        sort_resources(&mut matches, query.sort_by, query.order);

        let data: Vec<Resource> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.limit as usize)
            .cloned()
            .collect();

        ResourceList::new(data, total, query.page, query.limit)
    }
}

impl ResourceRepository for CachedResourceRepository {
    fn find_by_id(&self, id: &str) -> Option<Resource> {
        let key = cache_keys::resource_by_id(id);

        if let Some(resource) = self.cache.get::<Resource>(&key) {
            return Some(resource);
        }

        debug!("Resource '{}' not cached, scanning dataset", id);
        let resource = self.scan(id);

        // Only found resources are cached; a miss always re-scans so a
        // resource added to a future dataset is never shadowed by a
        // cached absence.
        if let Some(resource) = &resource {
            self.cache.set(&key, resource, self.ttl.resource);
        }

        resource
    }

    fn find_all(&self, query: &ResourceQuery) -> ResourceList {
        let key = cache_keys::resource_list(query);

        if let Some(list) = self.cache.get::<ResourceList>(&key) {
            return list;
        }

        debug!("Listing not cached, running query pipeline: {:?}", query);
        let list = self.run_query(query);
        self.cache.set(&key, &list, self.ttl.list);
        list
    }

    fn count(&self) -> u64 {
        self.dataset.len() as u64
    }
}

/// Stable sort by the requested field.
///
/// Descending order reverses the comparator rather than the sorted
/// output, so equal keys keep their relative dataset order in both
/// directions.
fn sort_resources(resources: &mut [&Resource], sort_by: SortField, order: SortOrder) {
    resources.sort_by(|a, b| {
        let ascending = match sort_by {
            SortField::Name => a.name.cmp(&b.name),
            SortField::DownloadCount => a.download_count.cmp(&b.download_count),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        match order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use chrono::{TimeZone, Utc};
    use discovery_core::{Platform, ResourceType};

    fn resource(
        id: &str,
        resource_type: ResourceType,
        platform: Platform,
        download_count: u64,
        updated_at_secs: i64,
    ) -> Resource {
        Resource {
            id: id.to_string(),
            name: id.to_string(),
            resource_type,
            platform,
            download_count,
            updated_at: Utc.timestamp_opt(updated_at_secs, 0).unwrap(),
            extra: serde_json::Map::new(),
        }
    }

    /// The three-resource fixture used across the pipeline tests.
    fn repo() -> CachedResourceRepository {
        let dataset = Dataset::from_resources(vec![
            resource("a", ResourceType::Theme, Platform::All, 5, 1_000),
            resource("b", ResourceType::Plugin, Platform::Windows, 10, 2_000),
            resource("c", ResourceType::Theme, Platform::Linux, 1, 3_000),
        ])
        .unwrap();
        CachedResourceRepository::new(dataset, Arc::new(MemoryCache::new()))
    }

    fn ids(list: &ResourceList) -> Vec<&str> {
        list.data.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_theme_filter_sorted_by_downloads_asc() {
        let repo = repo();
        let query = ResourceQuery::new(1, 10)
            .with_type(ResourceType::Theme)
            .sorted_by(SortField::DownloadCount, SortOrder::Asc);

        let list = repo.find_all(&query);
        assert_eq!(ids(&list), vec!["c", "a"]);
        assert_eq!(list.meta.total, 2);
        assert_eq!(list.meta.page, 1);
        assert_eq!(list.meta.limit, 10);
        assert_eq!(list.meta.pages, 1);
    }

    #[test]
    fn test_second_page_of_two() {
        let repo = repo();
        let query = ResourceQuery::new(2, 1)
            .with_type(ResourceType::Theme)
            .sorted_by(SortField::DownloadCount, SortOrder::Asc);

        let list = repo.find_all(&query);
        assert_eq!(ids(&list), vec!["a"]);
        assert_eq!(list.meta.total, 2);
        assert_eq!(list.meta.pages, 2);
    }

    #[test]
    fn test_platform_filter_includes_wildcard() {
        let repo = repo();
        let query = ResourceQuery::new(1, 10)
            .with_platform(Platform::Windows)
            .sorted_by(SortField::Name, SortOrder::Asc);

        let list = repo.find_all(&query);
        // "b" is windows, "a" is tagged all; "c" (linux) is excluded
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert_eq!(list.meta.total, 2);
    }

    #[test]
    fn test_total_is_independent_of_pagination() {
        let repo = repo();
        for page in 1..=4 {
            let query = ResourceQuery::new(page, 1).with_type(ResourceType::Theme);
            assert_eq!(repo.find_all(&query).meta.total, 2);
        }
    }

    #[test]
    fn test_page_past_the_end_is_empty_with_full_meta() {
        let repo = repo();
        let query = ResourceQuery::new(9, 10);

        let list = repo.find_all(&query);
        assert!(list.is_empty());
        assert_eq!(list.meta.total, 3);
        assert_eq!(list.meta.pages, 1);
    }

    #[test]
    fn test_huge_page_number_is_empty_not_wrapped() {
        // A pathological page must land past the end, never wrap the
        // offset back into the dataset.
        let repo = repo();
        let query = ResourceQuery::new(u32::MAX, ResourceQuery::MAX_LIMIT);

        let list = repo.find_all(&query);
        assert!(list.is_empty());
        assert_eq!(list.meta.total, 3);
        assert_eq!(list.meta.pages, 1);
    }

    #[test]
    fn test_empty_dataset() {
        let repo = CachedResourceRepository::new(
            Dataset::from_resources(Vec::new()).unwrap(),
            Arc::new(MemoryCache::new()),
        );

        let list = repo.find_all(&ResourceQuery::default());
        assert!(list.is_empty());
        assert_eq!(list.meta.total, 0);
        assert_eq!(list.meta.pages, 0);
    }

    #[test]
    fn test_sort_is_stable_on_ties_in_both_directions() {
        // x and y tie on download_count; dataset order is x before y
        let dataset = Dataset::from_resources(vec![
            resource("x", ResourceType::Theme, Platform::All, 7, 1),
            resource("y", ResourceType::Theme, Platform::All, 7, 2),
            resource("z", ResourceType::Theme, Platform::All, 3, 3),
        ])
        .unwrap();
        let repo = CachedResourceRepository::new(dataset, Arc::new(MemoryCache::new()));

        let asc = repo.find_all(
            &ResourceQuery::new(1, 10).sorted_by(SortField::DownloadCount, SortOrder::Asc),
        );
        assert_eq!(ids(&asc), vec!["z", "x", "y"]);

        let desc = repo.find_all(
            &ResourceQuery::new(1, 10).sorted_by(SortField::DownloadCount, SortOrder::Desc),
        );
        // Reversed comparator, not reversed output: x still precedes y
        assert_eq!(ids(&desc), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_sort_by_name_and_updated_at() {
        let repo = repo();

        let by_name =
            repo.find_all(&ResourceQuery::new(1, 10).sorted_by(SortField::Name, SortOrder::Asc));
        assert_eq!(ids(&by_name), vec!["a", "b", "c"]);

        let newest_first = repo
            .find_all(&ResourceQuery::new(1, 10).sorted_by(SortField::UpdatedAt, SortOrder::Desc));
        assert_eq!(ids(&newest_first), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_find_by_id() {
        let repo = repo();
        assert_eq!(repo.find_by_id("b").unwrap().id, "b");
        assert!(repo.find_by_id("nope").is_none());
    }

    #[test]
    fn test_count_ignores_filters() {
        assert_eq!(repo().count(), 3);
    }
}
