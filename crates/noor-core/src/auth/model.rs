//! Credential domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum PIN length accepted at first-time setup.
pub const MIN_PIN_LENGTH: usize = 4;

/// A member's PIN credential.
///
/// Created exactly once, on the first authentication attempt for a member
/// with no stored credential. Never mutated afterwards; there is no
/// PIN-change operation. The PIN is stored and compared as a plain string
/// (exact equality, no hashing, no rate limiting). JSON field names
/// (`memberName`, `createdAt`) match the records written by earlier versions
/// of the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub member_name: String,
    pub pin: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

impl Credential {
    pub fn new(member_name: impl Into<String>, pin: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            member_name: member_name.into(),
            pin: pin.into(),
            created_at: created_at.to_rfc3339(),
        }
    }

    /// Exact string comparison against a submitted PIN.
    pub fn matches(&self, pin: &str) -> bool {
        self.pin == pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let created = "2024-01-15T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let credential = Credential::new("Umar Qureshi", "4242", created);

        let json = serde_json::to_string(&credential).unwrap();
        assert!(json.contains("\"memberName\":\"Umar Qureshi\""));
        assert!(json.contains("\"createdAt\""));

        let back: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(back, credential);
    }

    #[test]
    fn test_matches_is_exact() {
        let credential = Credential::new("Amna", "1234", Utc::now());
        assert!(credential.matches("1234"));
        assert!(!credential.matches("12345"));
        assert!(!credential.matches("123"));
    }
}
