//! Taskmaster Analytics HTTP Server Binary
//!
//! Loads configuration and the dataset, then serves the REST API. A dataset
//! that is missing, malformed or fails validation aborts startup.
//!
//! # Usage
//!
//! ```bash
//! DATA_DIR=./data cargo run --bin taskmaster-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3001)
//! - `DATA_DIR`: Directory holding contestants.json and seasons.json (default: data)
//! - `STRICT_VALIDATION`: Fail on invariant violations (default: true)
//! - `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY`: Enable the chat assistant
//! - `AZURE_OPENAI_DEPLOYMENT`: Chat deployment name (default: gpt-4o)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use taskmaster_analytics::config::AppConfig;
use taskmaster_analytics::db::repository::DatasetRepository;
use taskmaster_analytics::db::{LocalRepository, ValidationPolicy};
use taskmaster_analytics::http::{create_router, AppState};
use taskmaster_analytics::services::ChatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Taskmaster Analytics server");

    let config = AppConfig::load()?;
    let policy = ValidationPolicy::from_strict(config.dataset.strict_validation);

    let repository = LocalRepository::load(&config.dataset.data_dir, policy).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load dataset from {}: {}",
            config.dataset.data_dir.display(),
            e
        )
    })?;
    info!(
        "Dataset loaded: {} contestants, {} seasons ({:?} validation)",
        repository.contestant_count(),
        repository.season_count(),
        policy
    );

    let chat = ChatService::from_config(&config.chat);
    if chat.is_configured() {
        info!("Chat assistant enabled (deployment {})", config.chat.deployment);
    } else {
        warn!("Chat assistant not configured; chat requests get the fallback reply");
    }

    let repository: Arc<dyn DatasetRepository> = Arc::new(repository);
    let app = create_router(AppState::new(repository, chat));

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
