use super::aggregation::compute_analysis;
use super::summary::*;
use crate::api::{
    BreakdownEntry, Contestant, ContestantId, Season, SeasonContestant, SeasonWinner,
    SeriesNumber, Setting, TaskBreakdown,
};

fn contestant(id: i64, name: &str, episodes: u32, ppt: f64) -> Contestant {
    let mut task_breakdown = TaskBreakdown::default();
    task_breakdown
        .setting
        .insert(Setting::Prize, BreakdownEntry::new(5, 2, 40.0, 2.8));
    Contestant {
        id: ContestantId::new(id),
        name: name.to_string(),
        season_ids: vec![SeriesNumber::new(1), SeriesNumber::new(4)],
        season_wins: 0,
        episodes,
        episode_wins: 1,
        episode_win_pct: 20.0,
        base_points: 50,
        bonus_points: 0,
        points_deducted: 0,
        total_points: 50,
        points_per_episode: 10.0,
        tasks_attempted: 25,
        tasks_won: 8,
        task_win_pct: 32.0,
        points_per_task: ppt,
        dqs: 0,
        task_breakdown,
    }
}

fn season(series: u32, winner: &str) -> Season {
    Season {
        series_number: SeriesNumber::new(series),
        year: 2014 + series as i32,
        episodes: 6,
        contestants: vec![SeasonContestant {
            id: ContestantId::new(series as i64),
            name: winner.to_string(),
            total_points: 0,
            points_per_task: 0.0,
            episode_win_pct: 0.0,
        }],
        winner: SeasonWinner {
            id: ContestantId::new(series as i64),
            name: winner.to_string(),
        },
    }
}

fn digest(contestants: &[Contestant], seasons: &[Season]) -> String {
    build_data_summary(contestants, &compute_analysis(contestants, seasons))
}

#[test]
fn test_summary_sections_and_defaults() {
    let contestants = vec![contestant(1, "Josh", 6, 3.1), contestant(2, "Guest", 1, 9.0)];
    let seasons = vec![season(1, "Josh"), season(2, "Katherine")];
    let text = digest(&contestants, &seasons);

    assert!(text.starts_with("TASKMASTER UK DATA SUMMARY"));
    assert!(text.contains("Total UK Contestants: 1"));
    assert!(text.contains("Season Winners: S1: Josh, S2: Katherine"));
    assert!(text.contains("Non-Winners (1): Avg PpT=3.1"));
    assert!(text.contains("Josh (PpT: 3.1, S1,4)"));
    assert!(text.contains("Josh (S1,4): PpT=3.1"));
    assert!(text.contains("Prize=2.8"));
    // Categories the contestant never attempted read as zero.
    assert!(text.contains("Homework=0"));
    assert!(text.contains("Combo=0"));
    // Non-qualifying contestants are left out entirely.
    assert!(!text.contains("Guest"));
}

#[test]
fn test_summary_is_deterministic() {
    let contestants: Vec<Contestant> = (1..=20)
        .map(|i| contestant(i, &format!("C{}", i), 5, (i % 7) as f64))
        .collect();
    let seasons = vec![season(1, "C1")];
    assert_eq!(digest(&contestants, &seasons), digest(&contestants, &seasons));
}

#[test]
fn test_leaderboard_is_top_ten_with_stable_ties() {
    let mut contestants: Vec<Contestant> = (1..=12)
        .map(|i| contestant(i, &format!("C{}", i), 5, 1.0))
        .collect();
    contestants.push(contestant(13, "Best", 5, 4.0));
    let text = digest(&contestants, &[]);

    let board = text
        .lines()
        .skip_while(|l| !l.starts_with("TOP 10"))
        .nth(1)
        .unwrap();
    let names: Vec<&str> = board
        .split("; ")
        .map(|entry| entry.split(" (").next().unwrap())
        .collect();
    assert_eq!(names.len(), TOP_N);
    assert_eq!(names[0], "Best");
    assert_eq!(names[1..], ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9"]);
}

#[test]
fn test_summary_is_bounded_with_marker() {
    let contestants: Vec<Contestant> = (1..=200)
        .map(|i| contestant(i, &format!("Contestant number {}", i), 5, 2.0))
        .collect();
    let analysis = compute_analysis(&contestants, &[]);

    let full = build_data_summary(&contestants, &analysis);
    assert!(full.chars().count() <= MAX_SUMMARY_CHARS);
    assert!(!full.contains("more)"));

    let limit = 4_000;
    let bounded = build_data_summary_bounded(&contestants, &analysis, limit);
    assert!(bounded.chars().count() <= limit);
    let last = bounded.lines().last().unwrap();
    assert!(last.starts_with("… ("), "unexpected tail: {}", last);
    assert!(last.ends_with(" more)"));

    let shown = bounded
        .lines()
        .filter(|l| l.starts_with("Contestant number ") && l.contains("): PpT="))
        .count();
    let hidden: usize = last
        .trim_start_matches("… (")
        .trim_end_matches(" more)")
        .parse()
        .unwrap();
    assert_eq!(shown + hidden, 200);
}
