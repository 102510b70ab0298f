//! Core domain of the Noor tracker: roster, progress records, ranking,
//! activity classification, PIN gating, and change propagation.
//!
//! Everything here depends only on repository traits; concrete persistence
//! lives in `noor-infrastructure`.

pub mod activity;
pub mod auth;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod progress;
pub mod roster;
pub mod sync;

// Re-export common error type
pub use error::{NoorError, Result};
