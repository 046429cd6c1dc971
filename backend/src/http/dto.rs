//! Data Transfer Objects for the HTTP API.
//!
//! Model and analysis types are re-exported from the api module since they
//! already derive Serialize/Deserialize; only list wrappers and the health
//! payload live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    AnalysisData, ChatReply, ChatRequest, Contestant, DatasetInfo, Season, ValidationReport,
};

/// Response for contestant listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestantListResponse {
    pub contestants: Vec<Contestant>,
    pub total: usize,
}

/// Response for season listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonListResponse {
    pub seasons: Vec<Season>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    pub message: String,
    /// Dataset status ("loaded" or an error description)
    pub dataset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<DatasetInfo>,
    /// Whether an upstream chat deployment is configured
    pub chat_configured: bool,
}
