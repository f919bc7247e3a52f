//! # Discovery Core
//!
//! Core types, domain model, and error definitions for the Discovery
//! Catalog API. This crate provides the foundational abstractions used
//! across all layers: the resource entity, the validated query value
//! object, the paginated result envelope, and the error taxonomy.

pub mod domain;
pub mod envelope;
pub mod error;
pub mod query;
pub mod result;

pub use domain::*;
pub use envelope::*;
pub use error::*;
pub use query::*;
pub use result::*;
