//! Static catalog dataset.

use discovery_core::{DiscoveryError, DiscoveryResult, Resource};
use std::collections::HashSet;
use std::path::Path;

/// The catalog: an ordered, immutable collection of resources.
///
/// Loaded once at startup and held for the lifetime of the process.
/// Construction enforces `id` uniqueness; any load failure is fatal to
/// the caller, never served around.
#[derive(Debug, Clone)]
pub struct Dataset {
    resources: Vec<Resource>,
}

impl Dataset {
    /// Builds a dataset from already-parsed resources.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::DataSource`] if two resources share an id.
    pub fn from_resources(resources: Vec<Resource>) -> DiscoveryResult<Self> {
        let mut seen = HashSet::with_capacity(resources.len());
        for resource in &resources {
            if !seen.insert(resource.id.as_str()) {
                return Err(DiscoveryError::data_source(format!(
                    "Duplicate resource id '{}' in dataset",
                    resource.id
                )));
            }
        }
        Ok(Self { resources })
    }

    /// Parses a dataset from a JSON array of resources.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::DataSource`] on malformed JSON or
    /// duplicate ids.
    pub fn from_json(json: &str) -> DiscoveryResult<Self> {
        let resources: Vec<Resource> = serde_json::from_str(json)
            .map_err(|e| DiscoveryError::data_source(format!("Failed to parse dataset: {}", e)))?;
        Self::from_resources(resources)
    }

    /// Loads a dataset from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::DataSource`] if the file cannot be
    /// read or fails to parse.
    pub fn load(path: &Path) -> DiscoveryResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DiscoveryError::data_source(format!(
                "Failed to read dataset from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// Iterates resources in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Number of resources in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if the catalog holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
