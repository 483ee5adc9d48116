//! Scheduling priority for due entities.
//!
//! An entity's score is its active watcher count plus one average watcher count for every
//! full poll interval that has passed since it was last checked:
//!
//! ```text
//! score = watchers + floor(hours_since_checked / interval_hours) * average_watchers
//! ```
//!
//! Entities that were never checked are aged as if last checked one year ago, so they rank
//! high without permanently outranking everything else.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

/// Age assumed for an entity that has never been checked.
pub const NEVER_CHECKED_AGE_DAYS: i64 = 365;

/// A due entity with the inputs of its score.
#[derive(Debug, Clone)]
pub struct Candidate<T> {
    pub entity: T,
    pub watcher_count: u64,
    pub last_checked: Option<DateTime<Utc>>,
}

/// A candidate with its computed score.
#[derive(Debug, Clone)]
pub struct Scored<T> {
    pub entity: T,
    pub score: f64,
}

/// Mean watcher count across the given entities, or `0.0` when there are none.
pub fn average_watcher_count<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u64>,
{
    let (total, entities) = counts
        .into_iter()
        .fold((0u64, 0u64), |(total, n), count| (total + count, n + 1));

    if entities == 0 {
        return 0.0;
    }

    total as f64 / entities as f64
}

/// Computes the scheduling score of one entity.
///
/// # Arguments
/// - `watcher_count` - Active watchers following the entity
/// - `last_checked` - Time of the last successful check, `None` if never checked
/// - `now` - Reference time for the age computation
/// - `interval_hours` - Poll interval of the entity's kind
/// - `average` - Mean watcher count across all entities of the kind
pub fn score(
    watcher_count: u64,
    last_checked: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    interval_hours: u32,
    average: f64,
) -> f64 {
    let last_checked = last_checked.unwrap_or(now - Duration::days(NEVER_CHECKED_AGE_DAYS));
    let hours = (now - last_checked).num_seconds().max(0) as f64 / 3600.0;
    let intervals = (hours / f64::from(interval_hours.max(1))).floor();

    watcher_count as f64 + intervals * average
}

/// Scores candidates and orders them by descending score.
///
/// Candidates without watchers are dropped. The sort is stable, so equal scores keep the
/// order the candidates were given in.
pub fn rank<T>(
    candidates: Vec<Candidate<T>>,
    now: DateTime<Utc>,
    interval_hours: u32,
    average: f64,
) -> Vec<Scored<T>> {
    let mut scored: Vec<Scored<T>> = candidates
        .into_iter()
        .filter(|c| c.watcher_count > 0)
        .map(|c| Scored {
            score: score(c.watcher_count, c.last_checked, now, interval_hours, average),
            entity: c.entity,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    scored
}
