//! Aggregation engine: cohort statistics, task makeup, season rollups and
//! all-time records over the contestant collection.
//!
//! Every function here is a pure, total function of its input. Only
//! qualifying contestants (at least [`QUALIFYING_EPISODES`] episodes) take
//! part in any aggregate, so one-off guest appearances don't skew the
//! numbers. Outputs iterate `BTreeMap`s keyed by enums or series numbers,
//! which keeps repeated runs over the same input identical.

use std::collections::{BTreeMap, HashMap};

use crate::api::{
    AnalysisData, CategoryBreakdown, CohortStats, Contestant, RecordHolder, Records, Season,
    SeasonRollup, SeasonWinnerEntry, SeriesNumber, ShowStats, TaskCategory, TaskMakeup,
};

/// Minimum episode count for a contestant to count in aggregates.
pub const QUALIFYING_EPISODES: u32 = 5;

/// Contestants who share every task in an episode.
pub const CONTESTANTS_PER_TASK: u32 = 5;

/// Short descriptions of what the analysis compares.
pub const KEY_INSIGHTS: [&str; 3] = [
    "Comparing season winners vs non-winners across all task categories",
    "Task type performance correlations with series victory",
    "Episode win percentage patterns for champions",
];

pub fn is_qualifying(contestant: &Contestant) -> bool {
    contestant.episodes >= QUALIFYING_EPISODES
}

/// Qualifying contestants in input order.
pub fn qualifying(contestants: &[Contestant]) -> Vec<&Contestant> {
    contestants.iter().filter(|c| is_qualifying(c)).collect()
}

/// Split qualifying contestants into `(winners, non_winners)`.
///
/// A contestant is a winner iff they won at least one season. Input order is
/// kept within each cohort.
pub fn partition_cohorts(contestants: &[Contestant]) -> (Vec<&Contestant>, Vec<&Contestant>) {
    qualifying(contestants)
        .into_iter()
        .partition(|c| c.is_season_winner())
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Mean points-per-task for each category, over members who attempted it.
fn category_means<'a, C, F>(members: &[&'a Contestant], grouping: F) -> BTreeMap<C, f64>
where
    C: TaskCategory,
    F: Fn(&'a Contestant) -> &'a CategoryBreakdown<C>,
{
    C::ALL
        .iter()
        .map(|&category| {
            let avg = mean(
                members
                    .iter()
                    .map(|c| grouping(*c).get(category))
                    .filter(|entry| entry.attempted > 0)
                    .map(|entry| entry.ppt),
            );
            (category, round_to(avg, 2))
        })
        .collect()
}

/// Cohort statistics for an already-partitioned cohort.
///
/// Overall means are unweighted means over every member. An empty cohort
/// reports zero everywhere.
pub fn compute_cohort_stats(members: &[&Contestant]) -> CohortStats {
    let overall = |field: fn(&Contestant) -> f64| {
        round_to(mean(members.iter().map(|&c| field(c))), 2)
    };

    CohortStats {
        count: members.len(),
        avg_points_per_task: overall(|c: &Contestant| c.points_per_task),
        avg_points_per_episode: overall(|c: &Contestant| c.points_per_episode),
        avg_episode_win_pct: overall(|c: &Contestant| c.episode_win_pct),
        avg_task_win_pct: overall(|c: &Contestant| c.task_win_pct),
        by_format: category_means(members, |c| &c.task_breakdown.format),
        by_setting: category_means(members, |c| &c.task_breakdown.setting),
        by_activity: category_means(members, |c| &c.task_breakdown.activity),
        by_judgement: category_means(members, |c| &c.task_breakdown.judgement),
    }
}

/// Shared tasks are counted once per participant; this undoes that.
fn unique_task_count(attempted: u64) -> u32 {
    (attempted as f64 / CONTESTANTS_PER_TASK as f64).round() as u32
}

fn grouping_makeup<'a, C, F>(members: &[&'a Contestant], grouping: F) -> BTreeMap<C, u32>
where
    C: TaskCategory,
    F: Fn(&'a Contestant) -> &'a CategoryBreakdown<C>,
{
    let mut raw: BTreeMap<C, u64> = C::ALL.iter().map(|&c| (c, 0)).collect();
    for contestant in members {
        for (category, entry) in grouping(*contestant).iter() {
            *raw.entry(category).or_insert(0) += u64::from(entry.attempted);
        }
    }
    raw.into_iter()
        .map(|(category, sum)| (category, unique_task_count(sum)))
        .collect()
}

/// Estimated distinct task counts per category, over qualifying contestants.
pub fn compute_task_makeup(contestants: &[Contestant]) -> TaskMakeup {
    let members = qualifying(contestants);
    let total_tasks_attempted: u64 = members.iter().map(|c| u64::from(c.tasks_attempted)).sum();

    TaskMakeup {
        format: grouping_makeup(&members, |c| &c.task_breakdown.format),
        setting: grouping_makeup(&members, |c| &c.task_breakdown.setting),
        activity: grouping_makeup(&members, |c| &c.task_breakdown.activity),
        judgement: grouping_makeup(&members, |c| &c.task_breakdown.judgement),
        total_tasks_attempted,
        unique_tasks: unique_task_count(total_tasks_attempted),
    }
}

/// Point totals clamp at the `i64` bounds rather than wrapping.
fn saturating_points<I: IntoIterator<Item = i64>>(values: I) -> i64 {
    values.into_iter().fold(0, i64::saturating_add)
}

#[derive(Default)]
struct SeasonAccumulator {
    bonus_points: i64,
    points_deducted: i64,
    dqs: u64,
    total_points: i64,
    contestants: usize,
    episodes: u32,
}

/// Per-season totals, sorted by series number.
///
/// A contestant contributes to every season they appear in. The episode
/// count is a season fact repeated on each member, so the maximum is taken.
pub fn compute_season_rollups(
    contestants: &[Contestant],
    seasons: &[Season],
) -> Vec<SeasonRollup> {
    let mut by_series: BTreeMap<SeriesNumber, SeasonAccumulator> = BTreeMap::new();
    for contestant in qualifying(contestants) {
        for series in &contestant.season_ids {
            let acc = by_series.entry(*series).or_default();
            acc.bonus_points = acc.bonus_points.saturating_add(contestant.bonus_points);
            acc.points_deducted = acc.points_deducted.saturating_add(contestant.points_deducted);
            acc.dqs += u64::from(contestant.dqs);
            acc.total_points = acc.total_points.saturating_add(contestant.total_points);
            acc.contestants += 1;
            acc.episodes = acc.episodes.max(contestant.episodes);
        }
    }

    let years: HashMap<SeriesNumber, i32> = seasons
        .iter()
        .map(|s| (s.series_number, s.year))
        .collect();

    by_series
        .into_iter()
        .map(|(series, acc)| {
            let slots = u64::from(acc.episodes) * u64::from(CONTESTANTS_PER_TASK);
            let avg_points_per_episode = if slots == 0 {
                0.0
            } else {
                round_to(acc.total_points as f64 / slots as f64, 1)
            };
            SeasonRollup {
                series,
                year: years.get(&series).copied(),
                episodes: acc.episodes,
                contestants: acc.contestants,
                bonus_points: acc.bonus_points,
                points_deducted: acc.points_deducted,
                dqs: acc.dqs,
                total_points: acc.total_points,
                avg_points_per_episode,
            }
        })
        .collect()
}

/// Running holder of one record.
///
/// The first offer always takes the record; later offers only on strict
/// improvement, so ties stay with the earlier contestant.
struct RecordTracker<'a> {
    best: Option<(&'a str, f64)>,
    improves: fn(f64, f64) -> bool,
}

impl<'a> RecordTracker<'a> {
    fn highest() -> Self {
        Self {
            best: None,
            improves: |candidate, current| candidate > current,
        }
    }

    fn lowest() -> Self {
        Self {
            best: None,
            improves: |candidate, current| candidate < current,
        }
    }

    fn offer(&mut self, name: &'a str, value: f64) {
        match self.best {
            Some((_, current)) if !(self.improves)(value, current) => {}
            _ => self.best = Some((name, value)),
        }
    }

    fn finish(self) -> RecordHolder {
        match self.best {
            Some((name, value)) => RecordHolder {
                name: name.to_string(),
                value,
            },
            None => RecordHolder {
                name: String::new(),
                value: 0.0,
            },
        }
    }
}

/// The seven all-time records over qualifying contestants, in one pass.
pub fn compute_records(contestants: &[Contestant]) -> Records {
    let mut highest_ppt = RecordTracker::highest();
    let mut lowest_ppt = RecordTracker::lowest();
    let mut most_dqs = RecordTracker::highest();
    let mut most_episode_wins = RecordTracker::highest();
    let mut most_tasks_won = RecordTracker::highest();
    let mut highest_total = RecordTracker::highest();
    let mut lowest_total = RecordTracker::lowest();

    for c in qualifying(contestants) {
        let name = c.name.as_str();
        highest_ppt.offer(name, c.points_per_task);
        lowest_ppt.offer(name, c.points_per_task);
        most_dqs.offer(name, f64::from(c.dqs));
        most_episode_wins.offer(name, f64::from(c.episode_wins));
        most_tasks_won.offer(name, f64::from(c.tasks_won));
        highest_total.offer(name, c.total_points as f64);
        lowest_total.offer(name, c.total_points as f64);
    }

    Records {
        highest_points_per_task: highest_ppt.finish(),
        lowest_points_per_task: lowest_ppt.finish(),
        most_dqs: most_dqs.finish(),
        most_episode_wins: most_episode_wins.finish(),
        most_tasks_won: most_tasks_won.finish(),
        highest_total_points: highest_total.finish(),
        lowest_total_points: lowest_total.finish(),
    }
}

/// Show-wide totals, task makeup, season rollups and records.
pub fn compute_show_stats(contestants: &[Contestant], seasons: &[Season]) -> ShowStats {
    let members = qualifying(contestants);
    let rollups = compute_season_rollups(contestants, seasons);

    ShowStats {
        task_makeup: compute_task_makeup(contestants),
        total_episodes: rollups.iter().map(|r| u64::from(r.episodes)).sum(),
        total_points: saturating_points(members.iter().map(|c| c.total_points)),
        total_bonus_points: saturating_points(members.iter().map(|c| c.bonus_points)),
        total_points_deducted: saturating_points(members.iter().map(|c| c.points_deducted)),
        total_dqs: members.iter().map(|c| u64::from(c.dqs)).sum(),
        seasons: rollups,
        records: compute_records(contestants),
    }
}

/// The full analysis served to the dashboard and summarised for chat.
pub fn compute_analysis(contestants: &[Contestant], seasons: &[Season]) -> AnalysisData {
    let (winners, non_winners) = partition_cohorts(contestants);

    AnalysisData {
        total_contestants: winners.len() + non_winners.len(),
        total_seasons: seasons.len(),
        winners: compute_cohort_stats(&winners),
        non_winners: compute_cohort_stats(&non_winners),
        season_winners: seasons
            .iter()
            .map(|s| SeasonWinnerEntry {
                season: s.series_number,
                name: s.winner.name.clone(),
                id: s.winner.id,
            })
            .collect(),
        key_insights: KEY_INSIGHTS.iter().map(|s| s.to_string()).collect(),
        show: compute_show_stats(contestants, seasons),
    }
}
