//! Progress domain module.
//!
//! - `model`: `Position` and `ProgressRecord`
//! - `repository`: persistence trait for per-member records
//! - `store`: the read/save/delete service composing a repository with the
//!   change notifier

mod model;
pub mod repository;
mod store;

pub use model::{now_millis, Position, ProgressRecord};
pub use repository::ProgressRepository;
pub use store::ProgressStore;
