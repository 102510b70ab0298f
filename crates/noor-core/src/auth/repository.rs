//! Credential repository trait.

use async_trait::async_trait;

use crate::auth::model::Credential;
use crate::error::Result;

/// Persistence for per-member PIN credentials.
///
/// Keyed by the member name's storage key, in a namespace distinct from
/// progress records. One credential per member; `save` is only ever called
/// on the first-time setup path.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Loads the stored credential for `member_name`, if any.
    async fn find(&self, member_name: &str) -> Result<Option<Credential>>;

    /// Persists a newly created credential.
    async fn save(&self, credential: &Credential) -> Result<()>;
}
