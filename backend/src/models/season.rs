//! Season reference records.

use serde::{Deserialize, Serialize};

use super::contestant::{ContestantId, SeriesNumber};

/// Season-specific summary of one contestant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonContestant {
    pub id: ContestantId,
    pub name: String,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub points_per_task: f64,
    #[serde(default)]
    pub episode_win_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonWinner {
    pub id: ContestantId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub series_number: SeriesNumber,
    pub year: i32,
    pub episodes: u32,
    #[serde(default)]
    pub contestants: Vec<SeasonContestant>,
    pub winner: SeasonWinner,
}

impl Season {
    pub fn has_member(&self, id: ContestantId) -> bool {
        self.contestants.iter().any(|c| c.id == id)
    }

    /// The winner must be listed among the contestants whenever a list exists.
    pub fn winner_is_consistent(&self) -> bool {
        self.contestants.is_empty() || self.has_member(self.winner.id)
    }
}
