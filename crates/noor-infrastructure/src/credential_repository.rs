//! JSON-file-backed CredentialRepository implementation.
//!
//! Credentials live in their own directory, a namespace distinct from
//! progress records:
//! ```text
//! <data_dir>/pins/
//! └── pin_Bilal_Qureshi.json
//! ```

use std::path::Path;

use async_trait::async_trait;

use noor_core::auth::{Credential, CredentialRepository};
use noor_core::error::Result;
use noor_core::roster::storage_key;

use crate::paths::NoorPaths;
use crate::storage::JsonDirStorage;

/// One `pin_<key>.json` file per member.
pub struct JsonCredentialRepository {
    storage: JsonDirStorage,
}

impl JsonCredentialRepository {
    /// Creates a repository at the platform default location.
    pub fn at_default_location() -> Result<Self> {
        let paths = NoorPaths::new(None);
        Ok(Self::new(&paths.pins_dir()?))
    }

    /// Creates a repository rooted at `dir` (tests, `--data-dir`).
    pub fn new(dir: &Path) -> Self {
        Self {
            storage: JsonDirStorage::new(dir.to_path_buf()),
        }
    }

    fn file_name(member_name: &str) -> String {
        format!("pin_{}.json", storage_key(member_name))
    }
}

#[async_trait]
impl CredentialRepository for JsonCredentialRepository {
    async fn find(&self, member_name: &str) -> Result<Option<Credential>> {
        self.storage.load(&Self::file_name(member_name)).await
    }

    async fn save(&self, credential: &Credential) -> Result<()> {
        self.storage
            .save(&Self::file_name(&credential.member_name), credential)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn test_repository() -> (JsonCredentialRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonCredentialRepository::new(&temp_dir.path().join("pins"));
        (repo, temp_dir)
    }

    #[tokio::test]
    async fn test_save_and_find_round_trips() {
        let (repo, _temp_dir) = test_repository();
        let credential = Credential::new("Umar Qureshi", "8421", Utc::now());

        repo.save(&credential).await.unwrap();
        let found = repo.find("Umar Qureshi").await.unwrap().unwrap();
        assert_eq!(found, credential);
    }

    #[tokio::test]
    async fn test_find_without_credential_is_none() {
        let (repo, _temp_dir) = test_repository();
        assert!(repo.find("Mama").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_name_uses_pin_prefix_and_storage_key() {
        let (repo, temp_dir) = test_repository();
        repo.save(&Credential::new("Umar Qureshi", "8421", Utc::now()))
            .await
            .unwrap();

        assert!(temp_dir
            .path()
            .join("pins")
            .join("pin_Umar_Qureshi.json")
            .exists());
    }
}
