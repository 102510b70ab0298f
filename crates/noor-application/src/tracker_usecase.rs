//! Progress tracking use case.
//!
//! The only write path to the progress store: every save or reset requires
//! a [`PinGate`] authenticated for the target member. The store itself is
//! not identity-aware; this layer is where the PIN invariant is enforced.

use std::sync::Arc;

use tracing::info;

use noor_core::auth::PinGate;
use noor_core::error::{NoorError, Result};
use noor_core::progress::{Position, ProgressRecord, ProgressStore};

/// Orchestrates authenticated progress updates over the store.
pub struct TrackerUsecase {
    store: Arc<ProgressStore>,
}

impl TrackerUsecase {
    pub fn new(store: Arc<ProgressStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ProgressStore> {
        &self.store
    }

    /// Reads a member's current record (persisted or synthesized default).
    /// No authentication required; there is no read gate.
    pub async fn current_progress(&self, name: &str) -> Result<ProgressRecord> {
        self.store.read(name).await
    }

    fn require_authenticated(&self, gate: &PinGate, name: &str) -> Result<()> {
        if gate.is_authenticated_for(name) {
            Ok(())
        } else {
            Err(NoorError::Unauthenticated {
                name: name.to_string(),
            })
        }
    }

    /// Overwrites the member's record with `position`, stamped now.
    pub async fn update_progress(
        &self,
        gate: &PinGate,
        name: &str,
        position: Position,
    ) -> Result<ProgressRecord> {
        self.require_authenticated(gate, name)?;
        let record = self.store.save(name, position).await?;
        info!(member = name, position = %position, "progress updated");
        Ok(record)
    }

    /// Deletes the member's record, resetting them to the default position.
    pub async fn reset_progress(&self, gate: &PinGate, name: &str) -> Result<()> {
        self.require_authenticated(gate, name)?;
        self.store.delete(name).await?;
        info!(member = name, "progress reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noor_core::roster::Roster;
    use noor_core::sync::ChangeNotifier;
    use noor_infrastructure::{InMemoryCredentialRepository, InMemoryProgressRepository};

    struct Fixture {
        usecase: TrackerUsecase,
        roster: Arc<Roster>,
        credentials: Arc<InMemoryCredentialRepository>,
    }

    fn fixture() -> Fixture {
        let roster = Arc::new(Roster::new(vec!["Amna".into(), "Lareb".into()]).unwrap());
        let store = Arc::new(ProgressStore::new(
            roster.clone(),
            Arc::new(InMemoryProgressRepository::new()),
            ChangeNotifier::new(),
        ));
        Fixture {
            usecase: TrackerUsecase::new(store),
            roster,
            credentials: Arc::new(InMemoryCredentialRepository::new()),
        }
    }

    async fn authenticated_gate(fixture: &Fixture, member: &str, pin: &str) -> PinGate {
        let mut gate = PinGate::new(fixture.roster.clone(), fixture.credentials.clone());
        gate.choose_member(member).unwrap();
        gate.submit_credential_lookup().await.unwrap();
        gate.set_first_pin(pin, pin).await.unwrap();
        gate
    }

    #[tokio::test]
    async fn test_authenticated_save_and_reset() {
        let fixture = fixture();
        let gate = authenticated_gate(&fixture, "Amna", "4242").await;

        let record = fixture
            .usecase
            .update_progress(&gate, "Amna", Position::new(5, 10, 1))
            .await
            .unwrap();
        assert_eq!(record.position(), Position::new(5, 10, 1));

        fixture.usecase.reset_progress(&gate, "Amna").await.unwrap();
        let after = fixture.usecase.current_progress("Amna").await.unwrap();
        assert_eq!(after.position(), Position::default());
    }

    #[tokio::test]
    async fn test_unauthenticated_save_rejected() {
        let fixture = fixture();
        let gate = PinGate::new(fixture.roster.clone(), fixture.credentials.clone());

        let err = fixture
            .usecase
            .update_progress(&gate, "Amna", Position::new(1, 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, NoorError::Unauthenticated { .. }));

        // Nothing was written.
        let record = fixture.usecase.current_progress("Amna").await.unwrap();
        assert_eq!(record.position(), Position::default());
    }

    #[tokio::test]
    async fn test_gate_for_other_member_rejected() {
        let fixture = fixture();
        let gate = authenticated_gate(&fixture, "Lareb", "9876").await;

        let err = fixture
            .usecase
            .update_progress(&gate, "Amna", Position::new(3, 3, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, NoorError::Unauthenticated { .. }));
    }

    #[tokio::test]
    async fn test_reads_need_no_authentication() {
        let fixture = fixture();
        let record = fixture.usecase.current_progress("Lareb").await.unwrap();
        assert_eq!(record.position(), Position::default());
    }
}
