//! Concrete persistence for the Noor tracker: atomic JSON file storage,
//! path management, configuration loading, and in-memory repositories for
//! tests and embedding.

pub mod config_loader;
pub mod credential_repository;
pub mod memory;
pub mod paths;
pub mod progress_repository;
pub mod storage;

pub use config_loader::load_config;
pub use credential_repository::JsonCredentialRepository;
pub use memory::{InMemoryCredentialRepository, InMemoryProgressRepository};
pub use paths::NoorPaths;
pub use progress_repository::JsonProgressRepository;
