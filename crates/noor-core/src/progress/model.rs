//! Progress domain models.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A memorization position: Juz, then Surah and Ayah as finer-grained
/// tie-breakers.
///
/// Juz 0 means "not started". The derived `Ord` is lexicographic over
/// `(juz, surah, ayah)`, which is exactly the leaderboard comparison
/// (applied descending there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub juz: u32,
    pub surah: u32,
    pub ayah: u32,
}

impl Position {
    pub fn new(juz: u32, surah: u32, ayah: u32) -> Self {
        Self { juz, surah, ayah }
    }
}

impl Default for Position {
    /// The not-yet-started position: Juz 0, Surah 1, Ayah 1.
    fn default() -> Self {
        Self {
            juz: 0,
            surah: 1,
            ayah: 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Juz {}, Surah {}, Ayah {}",
            self.juz, self.surah, self.ayah
        )
    }
}

/// A member's persisted progress record.
///
/// Overwritten wholesale on each save; never partially updated. The JSON
/// field names (`lastUpdated`) match the records written by earlier versions
/// of the tracker, so existing files keep deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub name: String,
    pub juz: u32,
    pub surah: u32,
    pub ayah: u32,
    /// Epoch milliseconds of the most recent successful write.
    pub last_updated: i64,
}

impl ProgressRecord {
    /// Builds the record a save produces: the given position stamped `now`.
    pub fn with_position(name: impl Into<String>, position: Position, now_ms: i64) -> Self {
        Self {
            name: name.into(),
            juz: position.juz,
            surah: position.surah,
            ayah: position.ayah,
            last_updated: now_ms,
        }
    }

    /// The default record synthesized for a member with no persisted write.
    ///
    /// Never persisted until an explicit save. `last_updated = now` makes a
    /// never-touched member Active until a real timestamp ages out.
    pub fn synthesized(name: impl Into<String>, now_ms: i64) -> Self {
        Self::with_position(name, Position::default(), now_ms)
    }

    pub fn position(&self) -> Position {
        Position::new(self.juz, self.surah, self.ayah)
    }
}
