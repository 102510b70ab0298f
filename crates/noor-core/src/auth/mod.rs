//! PIN authentication domain module.
//!
//! - `model`: the per-member `Credential`
//! - `repository`: persistence trait for credentials
//! - `gate`: the authentication state machine gating progress writes

mod gate;
mod model;
pub mod repository;

pub use gate::{GateState, PinGate};
pub use model::{Credential, MIN_PIN_LENGTH};
pub use repository::CredentialRepository;
