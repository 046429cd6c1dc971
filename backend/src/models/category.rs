//! Task category groupings.
//!
//! Every task on the show is classified four independent ways: by format
//! (who takes part), by setting (where it happens), by activity (what kind of
//! skill it asks for) and by judgement (how it is scored). The category
//! universe is closed, so each grouping is an enum and per-contestant
//! breakdowns are maps keyed by those enums.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared behaviour of the four category enumerations.
pub trait TaskCategory: Copy + Ord + fmt::Debug + 'static {
    /// Name of the grouping as it appears in the source data (`"setting"`, ...).
    const GROUPING: &'static str;

    /// Every category of the grouping, in declaration order.
    const ALL: &'static [Self];

    /// Lowercase label used in the source data and in JSON output.
    fn label(self) -> &'static str;
}

define_task_category! {
    /// Who takes part in a task.
    Format, "format" {
        Solo => "solo",
        Team => "team",
        Split => "split",
        Tiebreak => "tiebreak",
    }
}

define_task_category! {
    /// Where a task is performed.
    Setting, "setting" {
        Prize => "prize",
        Filmed => "filmed",
        Homework => "homework",
        Live => "live",
    }
}

define_task_category! {
    /// The kind of skill a task leans on.
    Activity, "activity" {
        Creative => "creative",
        Mental => "mental",
        Physical => "physical",
        Social => "social",
    }
}

define_task_category! {
    /// How a task is scored.
    Judgement, "judgement" {
        Objective => "objective",
        Subjective => "subjective",
        Combo => "combo",
    }
}

/// Per-category task record for one contestant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub attempted: u32,
    pub won: u32,
    #[serde(default)]
    pub win_pct: f64,
    /// Points per task within the category.
    #[serde(default)]
    pub ppt: f64,
}

impl BreakdownEntry {
    pub fn new(attempted: u32, won: u32, win_pct: f64, ppt: f64) -> Self {
        Self {
            attempted,
            won,
            win_pct,
            ppt,
        }
    }
}

/// One grouping of a contestant's task breakdown.
///
/// Categories missing from the source record read as a zero entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "C: TaskCategory + Serialize",
        deserialize = "C: TaskCategory + Deserialize<'de>"
    )
)]
pub struct CategoryBreakdown<C: TaskCategory> {
    entries: BTreeMap<C, BreakdownEntry>,
}

impl<C: TaskCategory> CategoryBreakdown<C> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Entry for `category`, or the zero entry if the contestant has none.
    pub fn get(&self, category: C) -> BreakdownEntry {
        self.entries.get(&category).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, category: C, entry: BreakdownEntry) {
        self.entries.insert(category, entry);
    }

    /// Sum of `attempted` across every category of the grouping.
    pub fn total_attempted(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.attempted)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, &BreakdownEntry)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: TaskCategory> Default for CategoryBreakdown<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TaskCategory> FromIterator<(C, BreakdownEntry)> for CategoryBreakdown<C> {
    fn from_iter<I: IntoIterator<Item = (C, BreakdownEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// All four groupings of a contestant's tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    #[serde(default)]
    pub format: CategoryBreakdown<Format>,
    #[serde(default)]
    pub setting: CategoryBreakdown<Setting>,
    #[serde(default)]
    pub activity: CategoryBreakdown<Activity>,
    #[serde(default)]
    pub judgement: CategoryBreakdown<Judgement>,
}

impl TaskBreakdown {
    /// `(grouping name, total attempted)` for all four groupings.
    ///
    /// A grouping with no entries totals 0, so a record that leaves one out
    /// still has it checked against `tasksAttempted`.
    pub fn attempted_totals(&self) -> [(&'static str, u64); 4] {
        [
            (Format::GROUPING, self.format.total_attempted()),
            (Setting::GROUPING, self.setting.total_attempted()),
            (Activity::GROUPING, self.activity.total_attempted()),
            (Judgement::GROUPING, self.judgement.total_attempted()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_json_keys() {
        let json = r#"{"prize": {"attempted": 4, "won": 1, "winPct": 25.0, "ppt": 2.5},
                       "live": {"attempted": 1, "won": 0}}"#;
        let breakdown: CategoryBreakdown<Setting> = serde_json::from_str(json).unwrap();

        assert_eq!(breakdown.get(Setting::Prize).attempted, 4);
        assert_eq!(breakdown.get(Setting::Live).ppt, 0.0);
        assert_eq!(breakdown.total_attempted(), 5);
    }

    #[test]
    fn test_missing_category_reads_as_zero() {
        let breakdown: CategoryBreakdown<Activity> = CategoryBreakdown::new();
        assert_eq!(breakdown.get(Activity::Social), BreakdownEntry::default());
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let json = r#"{"underwater": {"attempted": 1, "won": 1}}"#;
        let result: Result<CategoryBreakdown<Setting>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_lists_every_category() {
        assert_eq!(Format::ALL.len(), 4);
        assert_eq!(Setting::ALL.len(), 4);
        assert_eq!(Activity::ALL.len(), 4);
        assert_eq!(Judgement::ALL, &[Judgement::Objective, Judgement::Subjective, Judgement::Combo]);
        assert_eq!(Judgement::Combo.to_string(), "combo");
    }

    #[test]
    fn test_attempted_totals_cover_missing_groupings() {
        let mut breakdown = TaskBreakdown::default();
        breakdown.setting.insert(Setting::Filmed, BreakdownEntry::new(3, 1, 0.0, 0.0));
        breakdown.setting.insert(Setting::Live, BreakdownEntry::new(u32::MAX, 0, 0.0, 0.0));
        assert_eq!(
            breakdown.attempted_totals(),
            [
                ("format", 0),
                ("setting", u64::from(u32::MAX) + 3),
                ("activity", 0),
                ("judgement", 0),
            ]
        );
    }
}
