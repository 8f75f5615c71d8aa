/// Shared application state
use crate::config::ServerConfig;
use attic_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db: Arc<Database>, config: Arc<ServerConfig>) -> Self {
        Self { db, config }
    }
}
