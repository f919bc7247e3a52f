//! Application state for Axum handlers.

use discovery_repository::ResourceRepository;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ResourceRepository>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self { repository }
    }
}
