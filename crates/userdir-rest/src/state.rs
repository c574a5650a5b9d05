//! Application state for Axum handlers.

use std::sync::Arc;
use userdir_cache::SnapshotCache;
use userdir_service::DirectoryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub cache: SnapshotCache,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(directory: Arc<dyn DirectoryService>, cache: SnapshotCache) -> Self {
        Self { directory, cache }
    }
}
