use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of the loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub contestant_count: usize,
    pub season_count: usize,
    /// SHA-256 of the raw source files, hex encoded.
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
    pub source: String,
}

pub const LIST_CONTESTANTS: &str = "list_contestants";
pub const GET_CONTESTANT: &str = "get_contestant";
pub const LIST_SEASONS: &str = "list_seasons";
pub const GET_SEASON: &str = "get_season";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_info_clone() {
        let info = DatasetInfo {
            contestant_count: 3,
            season_count: 1,
            checksum: "abc".to_string(),
            loaded_at: Utc::now(),
            source: "data".to_string(),
        };
        let cloned = info.clone();
        assert_eq!(cloned, info);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(LIST_CONTESTANTS, "list_contestants");
        assert_eq!(GET_SEASON, "get_season");
    }
}
