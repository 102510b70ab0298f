//! Unified path management for tracker data and configuration.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/noor/              # Config directory
//! └── config.toml              # Roster and poll settings
//!
//! ~/.local/share/noor/         # Data directory
//! ├── progress/                # One JSON file per member
//! │   └── progress_<key>.json
//! └── pins/                    # Credential namespace, distinct from progress
//!     └── pin_<key>.json
//! ```
//!
//! A base-directory override replaces both roots, which is how tests and the
//! CLI `--data-dir` flag point the tracker at a scratch location.

use std::path::{Path, PathBuf};

use noor_core::error::{NoorError, Result};

const APP_DIR_NAME: &str = "noor";

/// Resolves every path the tracker reads or writes.
#[derive(Debug, Clone, Default)]
pub struct NoorPaths {
    base: Option<PathBuf>,
}

impl NoorPaths {
    /// Uses platform directories, or `base_dir` as the single root when
    /// given (tests, `--data-dir`).
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base: base_dir.map(Path::to_path_buf),
        }
    }

    /// The tracker configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| NoorError::config("cannot determine config directory"))
    }

    /// The tracker data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| NoorError::config("cannot determine data directory"))
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding per-member progress records.
    pub fn progress_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("progress"))
    }

    /// Directory holding per-member PIN credentials.
    pub fn pins_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("pins"))
    }
}
