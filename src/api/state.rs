//! API server state

use std::sync::Arc;

use crate::catalog::AlbumCatalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared album catalog
    pub catalog: Arc<AlbumCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<AlbumCatalog>) -> Self {
        Self { catalog }
    }

    /// State backed by a catalog holding the startup seed records
    pub fn seeded() -> Self {
        Self::new(Arc::new(AlbumCatalog::seeded()))
    }
}
