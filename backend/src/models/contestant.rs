//! Contestant reference records.

use serde::{Deserialize, Serialize};

use super::category::TaskBreakdown;

crate::define_id_type!(
    /// Contestant identifier, stable across the dataset.
    i64,
    ContestantId
);

crate::define_id_type!(
    /// Series number of a season (1-based).
    u32,
    SeriesNumber
);

/// Full per-contestant statistics as loaded from the source of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: ContestantId,
    pub name: String,
    pub season_ids: Vec<SeriesNumber>,
    #[serde(default)]
    pub season_wins: u32,
    pub episodes: u32,
    #[serde(default)]
    pub episode_wins: u32,
    #[serde(default)]
    pub episode_win_pct: f64,
    #[serde(default)]
    pub base_points: i64,
    #[serde(default)]
    pub bonus_points: i64,
    #[serde(default)]
    pub points_deducted: i64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub points_per_episode: f64,
    #[serde(default)]
    pub tasks_attempted: u32,
    #[serde(default)]
    pub tasks_won: u32,
    #[serde(default)]
    pub task_win_pct: f64,
    #[serde(default)]
    pub points_per_task: f64,
    #[serde(default)]
    pub dqs: u32,
    #[serde(default)]
    pub task_breakdown: TaskBreakdown,
}

impl Contestant {
    /// Whether the contestant has won at least one season.
    pub fn is_season_winner(&self) -> bool {
        self.season_wins > 0
    }

    /// Total implied by the point components: base + bonus - deducted.
    ///
    /// Saturates at the `i64` bounds, so corrupt inputs fail the total
    /// check instead of overflowing.
    pub fn expected_total_points(&self) -> i64 {
        self.base_points
            .saturating_add(self.bonus_points)
            .saturating_sub(self.points_deducted)
    }

    pub fn computed_points_per_task(&self) -> f64 {
        self.total_points as f64 / self.tasks_attempted.max(1) as f64
    }

    pub fn computed_points_per_episode(&self) -> f64 {
        self.total_points as f64 / self.episodes.max(1) as f64
    }

    /// Series list rendered as `1,4` for compact text output.
    pub fn series_label(&self) -> String {
        self.season_ids
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
