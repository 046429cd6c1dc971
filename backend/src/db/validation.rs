//! Dataset validation run once at load time.
//!
//! Structural problems (duplicate keys, contestants without a season, a
//! winner missing from their own season) always block loading. Arithmetic
//! invariants on qualifying contestants block loading under
//! [`ValidationPolicy::Strict`] and are reported as warnings otherwise.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::{IssueSeverity, ValidationIssue, ValidationReport};
use crate::models::{Contestant, Season};
use crate::services::aggregation::is_qualifying;

/// How invariant violations on contestant records are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Invariant violations are load errors.
    #[default]
    Strict,
    /// Invariant violations are warnings.
    Lenient,
}

impl ValidationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    fn invariant_severity(self) -> IssueSeverity {
        match self {
            Self::Strict => IssueSeverity::Error,
            Self::Lenient => IssueSeverity::Warning,
        }
    }
}

fn contestant_issue(
    contestant: &Contestant,
    field: &str,
    severity: IssueSeverity,
    description: String,
) -> ValidationIssue {
    ValidationIssue {
        entity: "contestant".to_string(),
        entity_id: contestant.id.to_string(),
        field: field.to_string(),
        severity,
        description,
    }
}

fn season_issue(season: &Season, field: &str, description: String) -> ValidationIssue {
    ValidationIssue {
        entity: "season".to_string(),
        entity_id: season.series_number.to_string(),
        field: field.to_string(),
        severity: IssueSeverity::Error,
        description,
    }
}

/// Validate contestant and season collections against the dataset invariants.
pub fn validate_dataset(
    contestants: &[Contestant],
    seasons: &[Season],
    policy: ValidationPolicy,
) -> ValidationReport {
    let mut report = ValidationReport {
        total_contestants: contestants.len(),
        total_seasons: seasons.len(),
        ..Default::default()
    };

    let mut seen_ids = HashSet::new();
    for contestant in contestants {
        if !seen_ids.insert(contestant.id) {
            report.push(contestant_issue(
                contestant,
                "id",
                IssueSeverity::Error,
                format!("Duplicate contestant id {}", contestant.id),
            ));
        }

        if contestant.season_ids.is_empty() {
            report.push(contestant_issue(
                contestant,
                "seasonIds",
                IssueSeverity::Error,
                format!("{} has no season memberships", contestant.name),
            ));
        }

        if is_qualifying(contestant) {
            check_invariants(contestant, policy, &mut report);
        }
    }

    let mut seen_series = HashSet::new();
    for season in seasons {
        if !seen_series.insert(season.series_number) {
            report.push(season_issue(
                season,
                "seriesNumber",
                format!("Duplicate series number {}", season.series_number),
            ));
        }

        if !season.winner_is_consistent() {
            report.push(season_issue(
                season,
                "winner",
                format!(
                    "Winner {} ({}) is not listed among the season's contestants",
                    season.winner.name, season.winner.id
                ),
            ));
        }
    }

    report
}

fn check_invariants(contestant: &Contestant, policy: ValidationPolicy, report: &mut ValidationReport) {
    let severity = policy.invariant_severity();

    let expected = contestant.expected_total_points();
    if contestant.total_points != expected {
        report.push(contestant_issue(
            contestant,
            "totalPoints",
            severity,
            format!(
                "{}: total points {} != base {} + bonus {} - deducted {} ({})",
                contestant.name,
                contestant.total_points,
                contestant.base_points,
                contestant.bonus_points,
                contestant.points_deducted,
                expected
            ),
        ));
    }

    for (grouping, attempted) in contestant.task_breakdown.attempted_totals() {
        if attempted != u64::from(contestant.tasks_attempted) {
            report.push(contestant_issue(
                contestant,
                &format!("taskBreakdown.{}", grouping),
                severity,
                format!(
                    "{}: {} breakdown sums to {} attempted, record says {}",
                    contestant.name, grouping, attempted, contestant.tasks_attempted
                ),
            ));
        }
    }
}
