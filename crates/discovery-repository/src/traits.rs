//! Repository trait definitions.

use discovery_core::{Resource, ResourceList, ResourceQuery};

/// Read-only access to the resource catalog.
///
/// All operations are infallible once the repository is constructed:
/// the dataset is in memory and queries are pure computation. A
/// missing id is absence, not an error.
pub trait ResourceRepository: Send + Sync {
    /// Finds a resource by its id.
    fn find_by_id(&self, id: &str) -> Option<Resource>;

    /// Finds resources matching a validated query, with filtering,
    /// sorting, and pagination applied.
    fn find_all(&self, query: &ResourceQuery) -> ResourceList;

    /// Total number of resources in the catalog, ignoring filters.
    fn count(&self) -> u64;
}
