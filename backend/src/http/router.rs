//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Chat requests carry history, but nothing close to this.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive; the dataset is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dataset lookups
        .route("/contestants", get(handlers::list_contestants))
        .route("/contestants/{id}", get(handlers::get_contestant))
        .route("/seasons", get(handlers::list_seasons))
        .route("/seasons/{series}", get(handlers::get_season))
        // Derived views
        .route("/analysis", get(handlers::get_analysis))
        .route("/summary", get(handlers::get_summary))
        .route("/validation-report", get(handlers::get_validation_report))
        // Chat
        .route("/chat", post(handlers::post_chat));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::DatasetRepository;
    use crate::db::DatasetLoader;
    use crate::services::chat::ChatService;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let dataset = DatasetLoader::default()
            .load_records(Vec::new(), Vec::new(), "empty")
            .unwrap();
        let repo = Arc::new(LocalRepository::from_dataset(dataset)) as Arc<dyn DatasetRepository>;
        let state = AppState::new(repo, ChatService::new(None));
        let _router = create_router(state);
    }
}
