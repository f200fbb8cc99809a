// ABOUTME: Shared application state for the postboard HTTP server.
// ABOUTME: Holds the post service and the API base URL the frontend page points at.

use std::sync::Arc;

use postboard_core::{MemoryStore, PostService, PostStore};

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub posts: PostService,
    pub api_base_url: String,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, api_base_url: impl Into<String>) -> Self {
        Self {
            posts: PostService::new(store),
            api_base_url: api_base_url.into(),
        }
    }

    /// State backed by an empty in-memory store, for tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), "http://localhost:5002")
    }
}
