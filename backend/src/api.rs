//! Public API surface for the backend.
//!
//! This file consolidates the model and DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    Activity, BreakdownEntry, CategoryBreakdown, Contestant, ContestantId, Format, Judgement,
    Season, SeasonContestant, SeasonWinner, SeriesNumber, Setting, TaskBreakdown, TaskCategory,
};
pub use crate::routes::analysis::{
    AnalysisData, CohortStats, RecordHolder, Records, SeasonRollup, SeasonWinnerEntry, ShowStats,
    TaskMakeup,
};
pub use crate::routes::chat::{ChatMessage, ChatReply, ChatReplyStatus, ChatRequest, ChatRole};
pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::validation::{IssueSeverity, ValidationIssue, ValidationReport};
