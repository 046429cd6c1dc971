//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::DatasetRepository;
use crate::services::chat::ChatService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset, loaded before the server starts
    pub repository: Arc<dyn DatasetRepository>,
    /// Upstream chat gateway
    pub chat: Arc<ChatService>,
}

impl AppState {
    /// Create a new application state with the given repository and chat gateway.
    pub fn new(repository: Arc<dyn DatasetRepository>, chat: ChatService) -> Self {
        Self {
            repository,
            chat: Arc::new(chat),
        }
    }
}
