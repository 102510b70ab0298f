//! Error types for the Noor tracker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire tracker.
///
/// Validation failures (roster membership, PIN rules) are separate variants
/// so callers can re-prompt without string matching; storage-layer failures
/// collapse into `Storage`/`Serialization` and are absorbed into default
/// records on the read path.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum NoorError {
    /// A name outside the configured roster was used
    #[error("Unknown family member: '{name}'")]
    UnknownMember { name: String },

    /// First-time PIN setup with a PIN below the minimum length
    #[error("PIN too short: {actual} characters (minimum {minimum})")]
    PinTooShort { actual: usize, minimum: usize },

    /// First-time PIN setup where the confirmation did not match
    #[error("PINs do not match")]
    PinMismatch,

    /// Authentication attempt with a wrong PIN
    #[error("Invalid PIN")]
    InvalidPin,

    /// A PIN gate operation was called in a state that does not allow it
    #[error("'{operation}' is not valid in state {state}")]
    InvalidTransition { operation: String, state: String },

    /// A write was attempted without PIN authentication for the member
    #[error("Writing progress for '{name}' requires PIN authentication")]
    Unauthenticated { name: String },

    /// Persistence backend inaccessible
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted value failed to serialize or deserialize
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Startup misconfiguration (e.g. roster entries colliding on storage key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoorError {
    /// Creates an UnknownMember error
    pub fn unknown_member(name: impl Into<String>) -> Self {
        Self::UnknownMember { name: name.into() }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an UnknownMember error
    pub fn is_unknown_member(&self) -> bool {
        matches!(self, Self::UnknownMember { .. })
    }

    /// Check if this error is recoverable by re-prompting the user.
    ///
    /// Covers the PIN validation and authentication failures; everything
    /// else indicates a configuration or storage problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PinTooShort { .. } | Self::PinMismatch | Self::InvalidPin
        )
    }

    /// Check if this is a storage-layer error that the read path absorbs
    /// into a synthesized default record.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Serialization { .. } | Self::Io { .. }
        )
    }
}

impl From<std::io::Error> for NoorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NoorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NoorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A type alias for `Result<T, NoorError>`.
pub type Result<T> = std::result::Result<T, NoorError>;
