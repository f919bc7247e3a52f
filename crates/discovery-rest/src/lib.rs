//! # Discovery REST
//!
//! HTTP layer for the Discovery Catalog API: routing, query-string
//! validation, conditional requests (ETag / `If-None-Match`), error
//! translation, and request logging. Everything here is a thin adapter
//! over the repository; no catalog semantics live in this crate.

pub mod controllers;
pub mod etag;
pub mod extractors;
pub mod middleware;
pub mod responses;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;
