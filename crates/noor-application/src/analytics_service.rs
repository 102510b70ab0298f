//! Analytics snapshot assembly.
//!
//! Derived views are recomputed from a full store snapshot at a single
//! `now`; nothing here is incrementally maintained or cached.

use std::sync::Arc;

use noor_core::activity::{elapsed_days, is_active, is_behind, top_performers};
use noor_core::leaderboard::{rank, LeaderboardEntry};
use noor_core::progress::{now_millis, Position, ProgressRecord, ProgressStore};

/// One member's row in the activity views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberActivity {
    pub name: String,
    pub position: Position,
    /// Whole days since the member's last write.
    pub days_inactive: i64,
}

/// Every derived view, assembled from one consistent snapshot.
#[derive(Debug, Clone)]
pub struct AnalyticsSnapshot {
    /// Epoch milliseconds the snapshot was taken at.
    pub taken_at: i64,
    /// Full ranking in leaderboard order.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Top-3 of the ranking, excluding members with no progress.
    pub top_performers: Vec<LeaderboardEntry>,
    /// Members updated within the last 7 days, in roster order.
    pub active: Vec<MemberActivity>,
    /// Members 7+ days without an update, most stale first.
    pub inactive: Vec<MemberActivity>,
    /// Members below Juz 10, least progressed first.
    pub behind: Vec<MemberActivity>,
}

/// Recomputes the derived views from the progress store.
pub struct AnalyticsService {
    store: Arc<ProgressStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<ProgressStore>) -> Self {
        Self { store }
    }

    /// Takes a point-in-time snapshot and assembles all views from it.
    pub async fn snapshot(&self) -> AnalyticsSnapshot {
        let records = self.store.snapshot().await;
        assemble(&records, now_millis())
    }
}

/// Pure assembly of the derived views from a record set at `now_ms`.
pub fn assemble(records: &[ProgressRecord], now_ms: i64) -> AnalyticsSnapshot {
    let leaderboard = rank(records);
    let top = top_performers(&leaderboard);

    let activity = |record: &ProgressRecord| MemberActivity {
        name: record.name.clone(),
        position: record.position(),
        days_inactive: elapsed_days(now_ms, record.last_updated),
    };

    let active: Vec<MemberActivity> = records
        .iter()
        .filter(|r| is_active(now_ms, r.last_updated))
        .map(activity)
        .collect();

    let mut inactive: Vec<MemberActivity> = records
        .iter()
        .filter(|r| !is_active(now_ms, r.last_updated))
        .map(activity)
        .collect();
    inactive.sort_by(|a, b| b.days_inactive.cmp(&a.days_inactive));

    let mut behind: Vec<MemberActivity> = records
        .iter()
        .filter(|r| is_behind(r.position()))
        .map(activity)
        .collect();
    behind.sort_by(|a, b| a.position.juz.cmp(&b.position.juz));

    AnalyticsSnapshot {
        taken_at: now_ms,
        leaderboard,
        top_performers: top,
        active,
        inactive,
        behind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noor_core::activity::MILLIS_PER_DAY;

    fn record(name: &str, juz: u32, days_ago: i64, now: i64) -> ProgressRecord {
        ProgressRecord::with_position(
            name,
            Position::new(juz, 1, 1),
            now - days_ago * MILLIS_PER_DAY,
        )
    }

    #[test]
    fn test_assemble_partitions_activity() {
        let now = 1_700_000_000_000;
        let records = vec![
            record("fresh", 15, 0, now),
            record("stale", 12, 9, now),
            record("older", 11, 30, now),
        ];

        let snapshot = assemble(&records, now);
        let active: Vec<&str> = snapshot.active.iter().map(|m| m.name.as_str()).collect();
        let inactive: Vec<&str> = snapshot.inactive.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(active, vec!["fresh"]);
        // Most stale first.
        assert_eq!(inactive, vec!["older", "stale"]);
        assert_eq!(snapshot.inactive[0].days_inactive, 30);
    }

    #[test]
    fn test_assemble_sorts_behind_by_juz_ascending() {
        let now = 1_700_000_000_000;
        let records = vec![
            record("nine", 9, 0, now),
            record("two", 2, 0, now),
            record("done", 30, 0, now),
            record("five", 5, 0, now),
        ];

        let snapshot = assemble(&records, now);
        let behind: Vec<&str> = snapshot.behind.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(behind, vec!["two", "five", "nine"]);
    }

    #[test]
    fn test_active_and_behind_are_independent() {
        let now = 1_700_000_000_000;
        let records = vec![record("both", 3, 0, now)];

        let snapshot = assemble(&records, now);
        assert_eq!(snapshot.active.len(), 1);
        assert_eq!(snapshot.behind.len(), 1);
    }

    #[test]
    fn test_top_performers_come_from_leaderboard_order() {
        let now = 1_700_000_000_000;
        let records = vec![
            record("third", 10, 0, now),
            record("zero", 0, 0, now),
            record("first", 25, 0, now),
            record("second", 20, 0, now),
            record("fourth", 8, 0, now),
        ];

        let snapshot = assemble(&records, now);
        let top: Vec<&str> = snapshot
            .top_performers
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(top, vec!["first", "second", "third"]);
    }
}
