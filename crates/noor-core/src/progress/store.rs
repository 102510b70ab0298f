//! The progress store service.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::warn;

use crate::error::{NoorError, Result};
use crate::progress::model::{now_millis, Position, ProgressRecord};
use crate::progress::repository::ProgressRepository;
use crate::roster::Roster;
use crate::sync::{ChangeNotifier, ChangeSignal};

/// Durable per-member position tracking over an injected repository.
///
/// Reads never fail for roster members: repository errors and malformed
/// records degrade to the synthesized default record. Writes surface
/// repository errors to the caller and fire the change notifier on success,
/// so derived views recompute. Conflicting writes resolve last-write-wins:
/// whole-record overwrite, no merge.
pub struct ProgressStore {
    roster: Arc<Roster>,
    repository: Arc<dyn ProgressRepository>,
    notifier: ChangeNotifier,
}

impl ProgressStore {
    pub fn new(
        roster: Arc<Roster>,
        repository: Arc<dyn ProgressRepository>,
        notifier: ChangeNotifier,
    ) -> Self {
        Self {
            roster,
            repository,
            notifier,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Subscribes to change signals fired by this store's saves and deletes
    /// (and by the poll safety net sharing the same notifier).
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeSignal> {
        self.notifier.subscribe()
    }

    fn ensure_member(&self, name: &str) -> Result<()> {
        if self.roster.contains(name) {
            Ok(())
        } else {
            Err(NoorError::unknown_member(name))
        }
    }

    /// Returns the persisted record for `name`, or the synthesized default.
    ///
    /// Fails only for names outside the roster. Storage failures are logged
    /// and absorbed so derived views always render.
    pub async fn read(&self, name: &str) -> Result<ProgressRecord> {
        self.ensure_member(name)?;
        Ok(self.read_or_default(name).await)
    }

    async fn read_or_default(&self, name: &str) -> ProgressRecord {
        match self.repository.find(name).await {
            Ok(Some(record)) => record,
            Ok(None) => ProgressRecord::synthesized(name, now_millis()),
            Err(err) => {
                warn!(member = name, error = %err, "progress read failed, using default record");
                ProgressRecord::synthesized(name, now_millis())
            }
        }
    }

    /// Overwrites the member's record with `position` stamped now.
    ///
    /// Write failures are surfaced; the record must not be assumed persisted
    /// when this returns an error.
    pub async fn save(&self, name: &str, position: Position) -> Result<ProgressRecord> {
        self.ensure_member(name)?;
        let record = ProgressRecord::with_position(name, position, now_millis());
        self.repository.save(&record).await?;
        self.notifier.notify();
        Ok(record)
    }

    /// Removes the persisted record; subsequent reads synthesize a fresh
    /// default with `last_updated = now` (deletion is itself an event).
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.ensure_member(name)?;
        self.repository.delete(name).await?;
        self.notifier.notify();
        Ok(())
    }

    /// Point-in-time snapshot of every roster member, in roster order,
    /// synthesizing defaults for members without a persisted record.
    pub async fn snapshot(&self) -> Vec<ProgressRecord> {
        let mut records = Vec::with_capacity(self.roster.len());
        for name in self.roster.iter() {
            records.push(self.read_or_default(name).await);
        }
        records
    }
}
