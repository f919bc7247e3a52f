//! # Discovery Repository
//!
//! Data access layer for the Discovery Catalog API: the static
//! dataset, the TTL cache abstraction, and the cache-aside
//! `ResourceRepository` embedding the filter/sort/paginate pipeline.

pub mod cache;
mod cached_repository;
mod dataset;
mod traits;

pub use cached_repository::{CacheTtl, CachedResourceRepository};
pub use dataset::Dataset;
pub use traits::ResourceRepository;
