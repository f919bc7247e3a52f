//! Caching infrastructure for the repository layer.
//!
//! This module provides a cache abstraction with an in-memory
//! implementation. The trait mirrors Redis patterns so a distributed
//! backend can be substituted without touching the repository.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;

pub use cache_interface::{Cache, CacheExt};
pub use memory_cache::MemoryCache;
