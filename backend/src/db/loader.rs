//! Loading the static dataset from its source of record.
//!
//! The source is a directory holding two JSON files, each a flat list of
//! records: `contestants.json` and `seasons.json`. A missing, unreadable or
//! unparseable file is a [`RepositoryError::LoadError`]; a parseable dataset
//! that fails validation is a [`RepositoryError::ValidationError`]. Either
//! way the caller must not begin serving.

use std::fs;
use std::path::Path;

use chrono::Utc;
use log::{info, warn};
use serde::de::DeserializeOwned;

use super::checksum::calculate_checksum;
use super::models::Dataset;
use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use super::validation::{validate_dataset, ValidationPolicy};
use crate::models::{Contestant, Season};

pub const CONTESTANTS_FILE: &str = "contestants.json";
pub const SEASONS_FILE: &str = "seasons.json";

/// Builds a [`Dataset`] from JSON sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader {
    policy: ValidationPolicy,
}

impl DatasetLoader {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Load both collections from `dir`.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> RepositoryResult<Dataset> {
        let dir = dir.as_ref();
        let contestants_json = read_source(dir, CONTESTANTS_FILE)?;
        let seasons_json = read_source(dir, SEASONS_FILE)?;
        self.load_json(&contestants_json, &seasons_json, dir.display().to_string())
    }

    /// Build a dataset from already-read JSON text.
    pub fn load_json(
        &self,
        contestants_json: &str,
        seasons_json: &str,
        source: impl Into<String>,
    ) -> RepositoryResult<Dataset> {
        let contestants: Vec<Contestant> = parse_source(contestants_json, CONTESTANTS_FILE)?;
        let seasons: Vec<Season> = parse_source(seasons_json, SEASONS_FILE)?;
        self.build(
            contestants,
            seasons,
            calculate_checksum(&[contestants_json, seasons_json]),
            source.into(),
        )
    }

    /// Build a dataset from in-memory collections.
    ///
    /// The checksum is taken over the canonical JSON serialization.
    pub fn load_records(
        &self,
        contestants: Vec<Contestant>,
        seasons: Vec<Season>,
        source: impl Into<String>,
    ) -> RepositoryResult<Dataset> {
        let contestants_json = serde_json::to_string(&contestants)
            .map_err(|e| RepositoryError::internal(format!("Failed to serialize contestants: {}", e)))?;
        let seasons_json = serde_json::to_string(&seasons)
            .map_err(|e| RepositoryError::internal(format!("Failed to serialize seasons: {}", e)))?;
        let checksum = calculate_checksum(&[&contestants_json, &seasons_json]);
        self.build(contestants, seasons, checksum, source.into())
    }

    fn build(
        &self,
        contestants: Vec<Contestant>,
        seasons: Vec<Season>,
        checksum: String,
        source: String,
    ) -> RepositoryResult<Dataset> {
        let validation = validate_dataset(&contestants, &seasons, self.policy);

        for issue in &validation.warnings {
            warn!(
                "Dataset warning ({} {} {}): {}",
                issue.entity, issue.entity_id, issue.field, issue.description
            );
        }

        if let Some(first) = validation.errors.first() {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "{} invalid record(s); first: {}",
                    validation.errors.len(),
                    first.description
                ),
                ErrorContext::new("load_dataset")
                    .with_entity(first.entity.clone())
                    .with_entity_id(&first.entity_id)
                    .with_details(format!("source={}", source)),
            ));
        }

        info!(
            "Loaded {} contestants, {} seasons from {} (checksum {})",
            contestants.len(),
            seasons.len(),
            source,
            &checksum[..12.min(checksum.len())]
        );

        Ok(Dataset {
            contestants,
            seasons,
            checksum,
            source,
            loaded_at: Utc::now(),
            validation,
        })
    }
}

fn read_source(dir: &Path, file: &str) -> RepositoryResult<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|e| {
        RepositoryError::load_with_context(
            format!("Failed to read {}: {}", path.display(), e),
            ErrorContext::new("load_dataset").with_entity(file),
        )
    })
}

fn parse_source<T: DeserializeOwned>(json: &str, file: &str) -> RepositoryResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| {
        RepositoryError::load_with_context(
            format!("Failed to parse {}: {}", file, e),
            ErrorContext::new("load_dataset")
                .with_entity(file)
                .with_details(format!("line={}, column={}", e.line(), e.column())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTESTANTS: &str = r#"[
        {"id": 1, "name": "Alpha", "seasonIds": [1], "seasonWins": 1, "episodes": 5,
         "basePoints": 40, "bonusPoints": 0, "pointsDeducted": 0, "totalPoints": 40,
         "tasksAttempted": 10, "tasksWon": 4, "pointsPerTask": 4.0,
         "taskBreakdown": {
            "format": {"solo": {"attempted": 10, "won": 4, "winPct": 40.0, "ppt": 4.0}},
            "setting": {"filmed": {"attempted": 10, "won": 4, "winPct": 40.0, "ppt": 4.0}},
            "activity": {"creative": {"attempted": 6, "won": 3}, "mental": {"attempted": 4, "won": 1}},
            "judgement": {"subjective": {"attempted": 10, "won": 4, "winPct": 40.0, "ppt": 4.0}}}}
    ]"#;
    const SEASONS: &str = r#"[
        {"seriesNumber": 1, "year": 2015, "episodes": 5,
         "contestants": [{"id": 1, "name": "Alpha"}],
         "winner": {"id": 1, "name": "Alpha"}}
    ]"#;

    #[test]
    fn test_load_from_json_text() {
        let dataset = DatasetLoader::default()
            .load_json(CONTESTANTS, SEASONS, "inline")
            .unwrap();
        assert_eq!(dataset.contestants.len(), 1);
        assert_eq!(dataset.seasons.len(), 1);
        assert_eq!(dataset.checksum, calculate_checksum(&[CONTESTANTS, SEASONS]));
        assert_eq!(dataset.info().source, "inline");
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let err = DatasetLoader::default()
            .load_json("[{", SEASONS, "inline")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::LoadError { .. }));
        assert_eq!(err.context().entity.as_deref(), Some(CONTESTANTS_FILE));
    }

    #[test]
    fn test_unknown_category_is_load_error() {
        let bad = CONTESTANTS.replace("filmed", "underwater");
        let err = DatasetLoader::default()
            .load_json(&bad, SEASONS, "inline")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::LoadError { .. }));
    }

    #[test]
    fn test_invariant_violation_fails_strict_but_not_lenient() {
        let bad = CONTESTANTS.replace(r#""totalPoints": 40"#, r#""totalPoints": 41"#);

        let err = DatasetLoader::new(ValidationPolicy::Strict)
            .load_json(&bad, SEASONS, "inline")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));

        let dataset = DatasetLoader::new(ValidationPolicy::Lenient)
            .load_json(&bad, SEASONS, "inline")
            .unwrap();
        assert_eq!(dataset.validation.warnings.len(), 1);
    }

    #[test]
    fn test_missing_grouping_fails_strict_load() {
        let bad = CONTESTANTS.replace(r#""judgement""#, r#""unused""#);
        let err = DatasetLoader::new(ValidationPolicy::Strict)
            .load_json(&bad, SEASONS, "inline")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert!(err.to_string().contains("judgement breakdown sums to 0"));
    }

    #[test]
    fn test_missing_directory_is_load_error() {
        let err = DatasetLoader::default()
            .load_dir("/definitely/not/a/dataset")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::LoadError { .. }));
    }
}
