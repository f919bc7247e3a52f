//! Domain model for the catalog.

mod resource;

pub use resource::{Platform, Resource, ResourceType};
