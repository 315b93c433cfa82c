//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::http::auth::BasicCredentials;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Credentials protected routes are checked against
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    /// Create a new application state with the given repository and
    /// credentials.
    pub fn new(repository: Arc<dyn FullRepository>, credentials: BasicCredentials) -> Self {
        Self {
            repository,
            credentials: Arc::new(credentials),
        }
    }
}
