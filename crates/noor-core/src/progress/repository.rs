//! Progress repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::progress::model::ProgressRecord;

/// Persistence for per-member progress records.
///
/// Implementations key records by the member name's storage key (see
/// [`crate::roster::storage_key`]) and are not identity-aware: callers are
/// responsible for roster validation and PIN gating before writes.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Loads the persisted record for `name`, if any.
    ///
    /// A record that exists but fails to deserialize is an error; the store
    /// absorbs it into the synthesized default on the read path.
    async fn find(&self, name: &str) -> Result<Option<ProgressRecord>>;

    /// Persists `record`, replacing any previous record for the same member.
    async fn save(&self, record: &ProgressRecord) -> Result<()>;

    /// Removes the persisted record for `name`. Not an error if absent.
    async fn delete(&self, name: &str) -> Result<()>;
}
