//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::session::SessionStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session store holding the last computed results.
    pub session: Arc<SessionStore>,
}

impl AppState {
    /// Create a new application state with an empty session.
    pub fn new() -> Self {
        Self {
            session: Arc::new(SessionStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
