//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! db service layer and the aggregation services.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use super::dto::{
    AnalysisData, ChatReply, ChatRequest, Contestant, ContestantListResponse, HealthResponse,
    Season, SeasonListResponse, ValidationReport,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ContestantId, SeriesNumber};
use crate::db::services as db_services;
use crate::services::{aggregation, summary};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

pub const HEALTH_MESSAGE: &str = "The Taskmaster is watching.";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting dataset status and revision.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo = state.repository.as_ref();
    let dataset = match db_services::health_check(repo).await {
        Ok(true) => "loaded".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };
    let info = db_services::dataset_info(repo).await.ok();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        message: HEALTH_MESSAGE.to_string(),
        dataset,
        info,
        chat_configured: state.chat.is_configured(),
    }))
}

// =============================================================================
// Contestants & Seasons
// =============================================================================

/// GET /v1/contestants
pub async fn list_contestants(
    State(state): State<AppState>,
) -> HandlerResult<ContestantListResponse> {
    let contestants = db_services::list_contestants(state.repository.as_ref()).await?;
    let total = contestants.len();
    Ok(Json(ContestantListResponse { contestants, total }))
}

/// GET /v1/contestants/{id}
pub async fn get_contestant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Contestant> {
    let contestant =
        db_services::get_contestant(state.repository.as_ref(), ContestantId::new(id)).await?;
    Ok(Json(contestant))
}

/// GET /v1/seasons
pub async fn list_seasons(State(state): State<AppState>) -> HandlerResult<SeasonListResponse> {
    let seasons = db_services::list_seasons(state.repository.as_ref()).await?;
    let total = seasons.len();
    Ok(Json(SeasonListResponse { seasons, total }))
}

/// GET /v1/seasons/{series}
pub async fn get_season(
    State(state): State<AppState>,
    Path(series): Path<u32>,
) -> HandlerResult<Season> {
    let season =
        db_services::get_season(state.repository.as_ref(), SeriesNumber::new(series)).await?;
    Ok(Json(season))
}

// =============================================================================
// Analysis
// =============================================================================

/// Contestants plus the analysis computed over them.
async fn analyse(state: &AppState) -> Result<(Vec<Contestant>, AnalysisData), AppError> {
    let repo = state.repository.as_ref();
    let contestants = db_services::list_contestants(repo).await?;
    let seasons = db_services::list_seasons(repo).await?;
    let analysis = aggregation::compute_analysis(&contestants, &seasons);
    Ok((contestants, analysis))
}

/// GET /v1/analysis
///
/// Winner and non-winner cohort stats, show totals, rollups and records.
pub async fn get_analysis(State(state): State<AppState>) -> HandlerResult<AnalysisData> {
    let (_, analysis) = analyse(&state).await?;
    Ok(Json(analysis))
}

/// GET /v1/summary
///
/// The plain-text digest handed to the chat model, for inspection.
pub async fn get_summary(State(state): State<AppState>) -> Result<String, AppError> {
    let (contestants, analysis) = analyse(&state).await?;
    Ok(summary::build_data_summary(&contestants, &analysis))
}

/// GET /v1/validation-report
pub async fn get_validation_report(
    State(state): State<AppState>,
) -> HandlerResult<ValidationReport> {
    let report = db_services::validation_report(state.repository.as_ref()).await?;
    Ok(Json(report))
}

// =============================================================================
// Chat
// =============================================================================

/// POST /v1/chat
///
/// Answer a question about the dataset. Upstream faults come back as a
/// fallback reply, never as an error status.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> HandlerResult<ChatReply> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let (contestants, analysis) = analyse(&state).await?;
    let grounding = summary::build_data_summary(&contestants, &analysis);
    debug!(
        "Chat request with {} history turn(s)",
        request.history.len()
    );

    let reply = state.chat.chat(message, &request.history, &grounding).await;
    info!("Chat reply status: {:?}", reply.status);
    Ok(Json(reply))
}
