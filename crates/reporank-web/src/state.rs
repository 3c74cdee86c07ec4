//! Shared application state for the web server.

use std::sync::Arc;

use reporank_github::client::RepositorySource;

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Upstream search backend. A trait object so tests can swap in a mock.
    pub source: Arc<dyn RepositorySource>,
}

impl AppState {
    pub fn new(source: Arc<dyn RepositorySource>) -> Self {
        Self { source }
    }
}

pub type SharedState = Arc<AppState>;
