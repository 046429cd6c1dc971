//! Plain-text digest of the dataset, used as chat grounding.
//!
//! The digest is a deterministic function of its input: no timestamps, no
//! randomness, stable ordering. It is bounded to [`MAX_SUMMARY_CHARS`]
//! characters; when the per-contestant section would overflow it is cut at a
//! line boundary and closed with a `… (N more)` marker.

use std::cmp::Ordering;
use std::fmt::Write;

use super::aggregation::is_qualifying;
use crate::api::{
    Activity, AnalysisData, CategoryBreakdown, CohortStats, Contestant, Setting, TaskCategory,
};

/// Upper bound on digest length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 48_000;

/// Size of the points-per-task leaderboard.
pub const TOP_N: usize = 10;

/// Build the digest with the default length bound.
pub fn build_data_summary(contestants: &[Contestant], analysis: &AnalysisData) -> String {
    build_data_summary_bounded(contestants, analysis, MAX_SUMMARY_CHARS)
}

/// Build the digest, keeping it within `max_chars` characters.
pub fn build_data_summary_bounded(
    contestants: &[Contestant],
    analysis: &AnalysisData,
    max_chars: usize,
) -> String {
    let qualifying: Vec<&Contestant> = contestants.iter().filter(|c| is_qualifying(c)).collect();

    let mut out = String::new();
    write_header(&mut out, analysis);
    write_cohorts(&mut out, analysis);
    write_leaderboard(&mut out, &qualifying);
    out.push_str("\nFULL CONTESTANT DATA:");

    let lines: Vec<String> = qualifying.iter().map(|c| contestant_line(c)).collect();
    append_bounded(&mut out, &lines, max_chars);

    truncate_chars(&mut out, max_chars);
    out
}

fn write_header(out: &mut String, analysis: &AnalysisData) {
    let winners = analysis
        .season_winners
        .iter()
        .map(|w| format!("S{}: {}", w.season, w.name))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "TASKMASTER UK DATA SUMMARY");
    let _ = writeln!(out, "===========================");
    let _ = writeln!(out, "Total UK Contestants: {}", analysis.total_contestants);
    let _ = writeln!(out, "Total Seasons Covered: {}", analysis.total_seasons);
    let _ = writeln!(out, "Season Winners: {}", winners);
}

fn write_cohorts(out: &mut String, analysis: &AnalysisData) {
    let _ = writeln!(out, "\nWINNER VS NON-WINNER STATS:");
    write_cohort(out, "Winners", &analysis.winners);
    write_cohort(out, "Non-Winners", &analysis.non_winners);
}

fn write_cohort(out: &mut String, label: &str, stats: &CohortStats) {
    let setting = |s: Setting| stats.by_setting.get(&s).copied().unwrap_or(0.0);
    let activity = |a: Activity| stats.by_activity.get(&a).copied().unwrap_or(0.0);

    let _ = writeln!(
        out,
        "{} ({}): Avg PpT={}, Avg PpE={}, Ep Win%={}%",
        label,
        stats.count,
        stats.avg_points_per_task,
        stats.avg_points_per_episode,
        stats.avg_episode_win_pct
    );
    let _ = writeln!(
        out,
        "  Prize Tasks: {}, Filmed: {}, Live: {}",
        setting(Setting::Prize),
        setting(Setting::Filmed),
        setting(Setting::Live)
    );
    let _ = writeln!(
        out,
        "  Creative: {}, Mental: {}, Physical: {}, Social: {}",
        activity(Activity::Creative),
        activity(Activity::Mental),
        activity(Activity::Physical),
        activity(Activity::Social)
    );
}

fn write_leaderboard(out: &mut String, qualifying: &[&Contestant]) {
    let mut ranked = qualifying.to_vec();
    // Stable: equal points-per-task keep input order.
    ranked.sort_by(|a, b| {
        b.points_per_task
            .partial_cmp(&a.points_per_task)
            .unwrap_or(Ordering::Equal)
    });

    let top = ranked
        .iter()
        .take(TOP_N)
        .map(|c| format!("{} (PpT: {}, S{})", c.name, c.points_per_task, c.series_label()))
        .collect::<Vec<_>>()
        .join("; ");

    let _ = writeln!(out, "\nTOP {} BY POINTS PER TASK:", TOP_N);
    let _ = writeln!(out, "{}", top);
}

/// `Label=ppt` for every category of a grouping; absent categories read as 0.
fn category_ppts<C: TaskCategory>(breakdown: &CategoryBreakdown<C>) -> Vec<String> {
    C::ALL
        .iter()
        .map(|&category| {
            format!(
                "{}={}",
                capitalize(category.label()),
                breakdown.get(category).ppt
            )
        })
        .collect()
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn contestant_line(c: &Contestant) -> String {
    let breakdown = &c.task_breakdown;
    let mut fields = vec![
        format!("PpT={}", c.points_per_task),
        format!("PpE={}", c.points_per_episode),
        format!("EpWin%={}%", c.episode_win_pct),
        format!("SeasonWins={}", c.season_wins),
    ];
    fields.extend(category_ppts(&breakdown.setting));
    fields.extend(category_ppts(&breakdown.activity));
    fields.extend(category_ppts(&breakdown.judgement));

    format!("{} (S{}): {}", c.name, c.series_label(), fields.join(", "))
}

fn more_marker(remaining: usize) -> String {
    format!("\n… ({} more)", remaining)
}

/// Append one line per entry while the result stays within `max_chars`.
fn append_bounded(out: &mut String, lines: &[String], max_chars: usize) {
    let mut used = out.chars().count();
    // Worst-case marker length, so the marker itself always fits.
    let reserve = more_marker(lines.len()).chars().count();

    for (index, line) in lines.iter().enumerate() {
        let needed = line.chars().count() + 1;
        let is_last = index + 1 == lines.len();
        let budget = if is_last { max_chars } else { max_chars.saturating_sub(reserve) };
        if used + needed > budget {
            out.push_str(&more_marker(lines.len() - index));
            return;
        }
        out.push('\n');
        out.push_str(line);
        used += needed;
    }
}

fn truncate_chars(out: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = out.char_indices().nth(max_chars) {
        out.truncate(byte_index);
    }
}
