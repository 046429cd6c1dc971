//! Service layer: the aggregation engine and its downstream consumers.
//!
//! - [`aggregation`]: cohort statistics, task makeup, season rollups, records
//! - [`summary`]: bounded plain-text digest of the dataset
//! - [`chat`]: upstream chat-completion gateway

pub mod aggregation;
pub mod chat;
pub mod summary;


#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;

pub use aggregation::{
    compute_analysis, compute_cohort_stats, compute_records, compute_season_rollups,
    compute_show_stats, compute_task_makeup, is_qualifying, partition_cohorts, qualifying,
};
pub use chat::{AzureOpenAiClient, ChatCompletionClient, ChatError, ChatService};
pub use summary::{build_data_summary, build_data_summary_bounded, MAX_SUMMARY_CHARS};
