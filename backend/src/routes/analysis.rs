//! Response types for the analysis view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Activity, ContestantId, Format, Judgement, SeriesNumber, Setting};

/// Comparative statistics for one cohort (season winners or everyone else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortStats {
    pub count: usize,
    pub avg_points_per_task: f64,
    pub avg_points_per_episode: f64,
    pub avg_episode_win_pct: f64,
    pub avg_task_win_pct: f64,
    /// Mean points-per-task by category, over members who attempted the category.
    pub by_format: BTreeMap<Format, f64>,
    pub by_setting: BTreeMap<Setting, f64>,
    pub by_activity: BTreeMap<Activity, f64>,
    pub by_judgement: BTreeMap<Judgement, f64>,
}

/// Holder of an all-time record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordHolder {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    pub highest_points_per_task: RecordHolder,
    pub lowest_points_per_task: RecordHolder,
    pub most_dqs: RecordHolder,
    pub most_episode_wins: RecordHolder,
    pub most_tasks_won: RecordHolder,
    pub highest_total_points: RecordHolder,
    pub lowest_total_points: RecordHolder,
}

/// Estimated number of distinct tasks per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMakeup {
    pub format: BTreeMap<Format, u32>,
    pub setting: BTreeMap<Setting, u32>,
    pub activity: BTreeMap<Activity, u32>,
    pub judgement: BTreeMap<Judgement, u32>,
    /// Raw sum of tasks attempted, counting each shared task once per participant.
    pub total_tasks_attempted: u64,
    pub unique_tasks: u32,
}

/// Per-season totals built from contestant records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRollup {
    pub series: SeriesNumber,
    pub year: Option<i32>,
    pub episodes: u32,
    pub contestants: usize,
    pub bonus_points: i64,
    pub points_deducted: i64,
    pub dqs: u64,
    pub total_points: i64,
    pub avg_points_per_episode: f64,
}

/// Show-wide totals, rollups and records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowStats {
    pub task_makeup: TaskMakeup,
    pub total_episodes: u64,
    pub total_points: i64,
    pub total_bonus_points: i64,
    pub total_points_deducted: i64,
    pub total_dqs: u64,
    pub seasons: Vec<SeasonRollup>,
    pub records: Records,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonWinnerEntry {
    pub season: SeriesNumber,
    pub name: String,
    pub id: ContestantId,
}

/// Complete analysis dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub total_contestants: usize,
    pub total_seasons: usize,
    pub winners: CohortStats,
    pub non_winners: CohortStats,
    pub season_winners: Vec<SeasonWinnerEntry>,
    pub key_insights: Vec<String>,
    pub show: ShowStats,
}

/// Route function name constants for analysis
pub const GET_ANALYSIS_DATA: &str = "get_analysis_data";
pub const GET_DATA_SUMMARY: &str = "get_data_summary";
