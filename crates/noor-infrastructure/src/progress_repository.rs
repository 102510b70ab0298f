//! JSON-file-backed ProgressRepository implementation.
//!
//! Directory structure:
//! ```text
//! <data_dir>/progress/
//! ├── progress_Bilal_Qureshi.json
//! └── progress_Mama.json
//! ```

use std::path::Path;

use async_trait::async_trait;

use noor_core::error::Result;
use noor_core::progress::{ProgressRecord, ProgressRepository};
use noor_core::roster::storage_key;

use crate::paths::NoorPaths;
use crate::storage::JsonDirStorage;

/// One `progress_<key>.json` file per member.
pub struct JsonProgressRepository {
    storage: JsonDirStorage,
}

impl JsonProgressRepository {
    /// Creates a repository at the platform default location.
    pub fn at_default_location() -> Result<Self> {
        let paths = NoorPaths::new(None);
        Ok(Self::new(&paths.progress_dir()?))
    }

    /// Creates a repository rooted at `dir` (tests, `--data-dir`).
    pub fn new(dir: &Path) -> Self {
        Self {
            storage: JsonDirStorage::new(dir.to_path_buf()),
        }
    }

    fn file_name(name: &str) -> String {
        format!("progress_{}.json", storage_key(name))
    }
}

#[async_trait]
impl ProgressRepository for JsonProgressRepository {
    async fn find(&self, name: &str) -> Result<Option<ProgressRecord>> {
        self.storage.load(&Self::file_name(name)).await
    }

    async fn save(&self, record: &ProgressRecord) -> Result<()> {
        self.storage
            .save(&Self::file_name(&record.name), record)
            .await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.storage.delete(&Self::file_name(name)).await
    }
}
