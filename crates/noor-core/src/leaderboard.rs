//! The ranking engine.
//!
//! A pure function from progress records to an ordered leaderboard. Callers
//! may truncate the result for display; truncation is a presentation
//! concern, not a ranking behavior.

use serde::Serialize;

use crate::progress::{Position, ProgressRecord};

/// A derived leaderboard row. Never stored; recomputed from the full record
/// set on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based, contiguous. Ties in position still receive distinct
    /// sequential ranks (total order, not dense ranking).
    pub rank: usize,
    pub name: String,
    pub position: Position,
}

/// Ranks `records` descending by `(juz, surah, ayah)`.
///
/// The sort is stable, so members with fully identical positions retain
/// their input (roster) order. The output is always a permutation of the
/// input.
pub fn rank(records: &[ProgressRecord]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&ProgressRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.position().cmp(&a.position()));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| LeaderboardEntry {
            rank: index + 1,
            name: record.name.clone(),
            position: record.position(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, juz: u32, surah: u32, ayah: u32) -> ProgressRecord {
        ProgressRecord::with_position(name, Position::new(juz, surah, ayah), 0)
    }

    #[test]
    fn test_orders_descending_by_juz_surah_ayah() {
        let records = vec![
            record("low", 2, 100, 50),
            record("high", 10, 1, 1),
            record("mid", 2, 114, 1),
        ];

        let board = rank(&records);
        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_is_permutation_of_input() {
        let records = vec![record("A", 1, 1, 1), record("B", 0, 1, 1), record("C", 30, 114, 6)];
        let board = rank(&records);
        assert_eq!(board.len(), records.len());
        for r in &records {
            assert!(board.iter().any(|e| e.name == r.name));
        }
    }

    #[test]
    fn test_ties_keep_roster_order_with_sequential_ranks() {
        // A saves {5,10,1}, B saves the same, C has no record.
        let records = vec![
            record("A", 5, 10, 1),
            record("B", 5, 10, 1),
            ProgressRecord::synthesized("C", 0),
        ];

        let board = rank(&records);
        assert_eq!(board[0].name, "A");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].name, "B");
        assert_eq!(board[1].rank, 2);
        assert_eq!(board[2].name, "C");
        assert_eq!(board[2].rank, 3);
        assert_eq!(board[2].position, Position::default());
    }

    #[test]
    fn test_adjacent_entries_are_sorted() {
        let records = vec![
            record("a", 3, 50, 7),
            record("b", 3, 50, 8),
            record("c", 29, 2, 1),
            record("d", 3, 49, 200),
        ];
        let board = rank(&records);
        for pair in board.windows(2) {
            assert!(pair[0].position >= pair[1].position);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[]).is_empty());
    }
}
