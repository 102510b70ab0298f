//! CLI commands and their shared wiring.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use noor_core::auth::CredentialRepository;
use noor_core::config::TrackerConfig;
use noor_core::progress::ProgressStore;
use noor_core::roster::Roster;
use noor_core::sync::ChangeNotifier;
use noor_infrastructure::{
    load_config, JsonCredentialRepository, JsonProgressRepository, NoorPaths,
};

pub mod analytics;
pub mod leaderboard;
pub mod progress;
pub mod report;
pub mod status;
pub mod watch;

/// Everything a command needs, wired once at startup.
pub struct AppContext {
    pub config: TrackerConfig,
    pub roster: Arc<Roster>,
    pub store: Arc<ProgressStore>,
    pub credentials: Arc<dyn CredentialRepository>,
}

impl AppContext {
    /// Loads configuration, validates the roster, and wires the JSON-backed
    /// repositories into a progress store.
    pub async fn build(data_dir: Option<&Path>) -> Result<Self> {
        let paths = NoorPaths::new(data_dir);
        let config = load_config(&paths).await?;
        let roster = Arc::new(config.roster()?);

        let progress_repository = Arc::new(JsonProgressRepository::new(&paths.progress_dir()?));
        let credentials: Arc<dyn CredentialRepository> =
            Arc::new(JsonCredentialRepository::new(&paths.pins_dir()?));

        let store = Arc::new(ProgressStore::new(
            roster.clone(),
            progress_repository,
            ChangeNotifier::new(),
        ));

        Ok(Self {
            config,
            roster,
            store,
            credentials,
        })
    }
}
