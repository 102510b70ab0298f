//! The activity classifier.
//!
//! Pure functions over timestamps and positions. Time-based activity and
//! position-based "behind" are independent axes: a member can be Active and
//! Behind at the same time.

use crate::leaderboard::LeaderboardEntry;
use crate::progress::Position;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Members whose last write is at least this many days old are Inactive.
pub const INACTIVITY_THRESHOLD_DAYS: i64 = 7;

/// Members below this Juz count as Behind.
pub const BEHIND_JUZ_THRESHOLD: u32 = 10;

/// How many leaderboard entries count as top performers.
pub const TOP_PERFORMER_COUNT: usize = 3;

/// Whole days elapsed between `last_updated_ms` and `now_ms`, floored.
pub fn elapsed_days(now_ms: i64, last_updated_ms: i64) -> i64 {
    (now_ms - last_updated_ms).div_euclid(MILLIS_PER_DAY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    /// Updated within the last 7 days.
    Active,
    /// No update for 7 days or more.
    Inactive,
}

pub fn classify_activity(now_ms: i64, last_updated_ms: i64) -> ActivityStatus {
    if elapsed_days(now_ms, last_updated_ms) < INACTIVITY_THRESHOLD_DAYS {
        ActivityStatus::Active
    } else {
        ActivityStatus::Inactive
    }
}

pub fn is_active(now_ms: i64, last_updated_ms: i64) -> bool {
    classify_activity(now_ms, last_updated_ms) == ActivityStatus::Active
}

/// Whether a position counts as behind (Juz below 10). Independent of
/// activity.
pub fn is_behind(position: Position) -> bool {
    position.juz < BEHIND_JUZ_THRESHOLD
}

/// Top 3 of the ranking, restricted to members with any progress at all
/// (Juz 0 is excluded from top-performer framing).
pub fn top_performers(leaderboard: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    leaderboard
        .iter()
        .filter(|entry| entry.position.juz > 0)
        .take(TOP_PERFORMER_COUNT)
        .cloned()
        .collect()
}
