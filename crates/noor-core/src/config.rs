//! Tracker configuration.
//!
//! Loaded once at startup (see `noor-infrastructure`); the roster derived
//! from it is immutable at runtime.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::roster::{Roster, DEFAULT_FAMILY_MEMBERS};

fn default_members() -> Vec<String> {
    DEFAULT_FAMILY_MEMBERS.iter().map(|s| s.to_string()).collect()
}

fn default_poll_interval_secs() -> u64 {
    5
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Ordered member names. Validated into a [`Roster`] at startup.
    #[serde(default = "default_members")]
    pub members: Vec<String>,
    /// Interval of the poll safety net used by status/analytics views.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            members: default_members(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl TrackerConfig {
    /// Validates the configured member list into a roster.
    pub fn roster(&self) -> Result<Roster> {
        Roster::new(self.members.clone())
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_produces_family_roster() {
        let config = TrackerConfig::default();
        let roster = config.roster().unwrap();
        assert_eq!(roster.members(), Roster::family().members());
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TrackerConfig = toml::from_str("members = [\"A\", \"B\"]").unwrap();
        assert_eq!(config.members, vec!["A", "B"]);
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: TrackerConfig = toml::from_str("").unwrap();
        assert_eq!(config.members.len(), 10);
    }
}
