//! Family roster: the fixed identity space of the tracker.
//!
//! Every operation in the system refers to a member by the exact name string
//! that appears in the roster. Storage keys are derived from names by
//! collapsing whitespace runs into single underscores, so roster validation
//! rejects any two entries that would collide on the same key.

use crate::error::{NoorError, Result};

/// Default family roster used when no configuration file is present.
pub const DEFAULT_FAMILY_MEMBERS: [&str; 10] = [
    "Bilal Qureshi",
    "Umar Qureshi",
    "Abdullah Qureshi",
    "Abir Qureshi",
    "Ammar Qureshi",
    "Arif Qureshi",
    "Hoorab",
    "Amna",
    "Lareb",
    "Mama",
];

/// Derives the storage key for a member name.
///
/// Whitespace runs become single underscores: `"Bilal Qureshi"` maps to
/// `"Bilal_Qureshi"`. The transform is deterministic; collision-freedom is
/// enforced by [`Roster::new`].
pub fn storage_key(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Static, ordered list of recognized member identities.
///
/// Order is the default iteration order (leaderboard ties keep it); it has
/// no other semantic meaning. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    /// Validates and builds a roster from an ordered list of names.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the list is empty, if an entry normalizes
    /// to an empty storage key, or if two entries normalize to the same
    /// storage key.
    pub fn new(members: Vec<String>) -> Result<Self> {
        if members.is_empty() {
            return Err(NoorError::config("roster must not be empty"));
        }

        let mut seen: Vec<String> = Vec::with_capacity(members.len());
        for name in &members {
            let key = storage_key(name);
            if key.is_empty() {
                return Err(NoorError::config(format!(
                    "roster entry '{}' normalizes to an empty storage key",
                    name
                )));
            }
            if seen.contains(&key) {
                return Err(NoorError::config(format!(
                    "roster entries collide on storage key '{}'",
                    key
                )));
            }
            seen.push(key);
        }

        Ok(Self { members })
    }

    /// The built-in family roster.
    pub fn family() -> Self {
        // The default list is known collision-free.
        Self {
            members: DEFAULT_FAMILY_MEMBERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Whether `name` is a recognized member (exact string match).
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Member names in roster order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Iterates member names in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::family()
    }
}
