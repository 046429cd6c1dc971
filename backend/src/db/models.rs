//! Shared data models re-exported for database layer consumers.

use chrono::{DateTime, Utc};

pub use crate::api::{
    Contestant, ContestantId, DatasetInfo, Season, SeriesNumber, ValidationIssue,
    ValidationReport,
};

/// The immutable in-memory dataset.
///
/// Built once by the loader; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Contestants in source order.
    pub contestants: Vec<Contestant>,
    /// Seasons in source order.
    pub seasons: Vec<Season>,
    pub checksum: String,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub validation: ValidationReport,
}

impl Dataset {
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            contestant_count: self.contestants.len(),
            season_count: self.seasons.len(),
            checksum: self.checksum.clone(),
            loaded_at: self.loaded_at,
            source: self.source.clone(),
        }
    }
}
