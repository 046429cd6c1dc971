//! Per-view response types and route name constants.

pub mod analysis;
pub mod chat;
pub mod landing;
pub mod validation;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::analysis::GET_ANALYSIS_DATA, "get_analysis_data");
        assert_eq!(super::analysis::GET_DATA_SUMMARY, "get_data_summary");
        assert_eq!(super::chat::POST_CHAT, "chat");
        assert_eq!(super::landing::LIST_CONTESTANTS, "list_contestants");
        assert_eq!(super::landing::GET_CONTESTANT, "get_contestant");
        assert_eq!(super::landing::LIST_SEASONS, "list_seasons");
        assert_eq!(super::landing::GET_SEASON, "get_season");
        assert_eq!(
            super::validation::GET_VALIDATION_REPORT,
            "get_validation_report"
        );
    }
}
