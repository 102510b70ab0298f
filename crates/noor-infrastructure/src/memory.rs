//! In-memory repository implementations.
//!
//! Back the same traits as the JSON repositories without touching disk.
//! Used by tests across the workspace and by embedders that want an
//! ephemeral tracker.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use noor_core::auth::{Credential, CredentialRepository};
use noor_core::error::Result;
use noor_core::progress::{ProgressRecord, ProgressRepository};
use noor_core::roster::storage_key;

/// HashMap-backed progress records, keyed by storage key.
#[derive(Default)]
pub struct InMemoryProgressRepository {
    records: RwLock<HashMap<String, ProgressRecord>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn find(&self, name: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.records.read().await.get(&storage_key(name)).cloned())
    }

    async fn save(&self, record: &ProgressRecord) -> Result<()> {
        self.records
            .write()
            .await
            .insert(storage_key(&record.name), record.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.records.write().await.remove(&storage_key(name));
        Ok(())
    }
}

/// HashMap-backed credentials, keyed by storage key.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find(&self, member_name: &str) -> Result<Option<Credential>> {
        Ok(self
            .credentials
            .read()
            .await
            .get(&storage_key(member_name))
            .cloned())
    }

    async fn save(&self, credential: &Credential) -> Result<()> {
        self.credentials
            .write()
            .await
            .insert(storage_key(&credential.member_name), credential.clone());
        Ok(())
    }
}
