//! The PIN gate state machine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::auth::model::{Credential, MIN_PIN_LENGTH};
use crate::auth::repository::CredentialRepository;
use crate::error::{NoorError, Result};
use crate::roster::Roster;

/// States of one authentication session.
///
/// `Unselected → MemberChosen → {AwaitingFirstPin | AwaitingPin} →
/// Authenticated`. `Authenticated` is terminal; a fresh gate starts over at
/// `Unselected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unselected,
    MemberChosen,
    /// No credential stored yet: first-time setup path.
    AwaitingFirstPin,
    /// A credential exists: normal PIN entry.
    AwaitingPin,
    Authenticated,
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GateState::Unselected => "Unselected",
            GateState::MemberChosen => "MemberChosen",
            GateState::AwaitingFirstPin => "AwaitingFirstPin",
            GateState::AwaitingPin => "AwaitingPin",
            GateState::Authenticated => "Authenticated",
        };
        write!(f, "{}", name)
    }
}

/// Binds a claimed member identity to proof of authorization before any
/// progress write.
///
/// Credential creation (first-time setup) is the only persistent mutation
/// this gate performs. Authentication outcomes are logged but produce no
/// audit record. A failed PIN leaves the gate in `AwaitingPin`: no lockout,
/// no attempt counter.
pub struct PinGate {
    roster: Arc<Roster>,
    credentials: Arc<dyn CredentialRepository>,
    state: GateState,
    member: Option<String>,
}

impl PinGate {
    pub fn new(roster: Arc<Roster>, credentials: Arc<dyn CredentialRepository>) -> Self {
        Self {
            roster,
            credentials,
            state: GateState::Unselected,
            member: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// The chosen member, once one has been selected.
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// The member this gate has authenticated, if any.
    pub fn authenticated_member(&self) -> Option<&str> {
        if self.state == GateState::Authenticated {
            self.member()
        } else {
            None
        }
    }

    pub fn is_authenticated_for(&self, name: &str) -> bool {
        self.authenticated_member() == Some(name)
    }

    fn require_state(&self, expected: GateState, operation: &str) -> Result<&str> {
        if self.state != expected {
            return Err(NoorError::InvalidTransition {
                operation: operation.to_string(),
                state: self.state.to_string(),
            });
        }
        // Every state past Unselected has a member.
        self.member
            .as_deref()
            .ok_or_else(|| NoorError::internal("gate state has no member"))
    }

    /// Selects the claimed identity. Valid from `Unselected` (or again from
    /// `MemberChosen` to change the selection before lookup).
    pub fn choose_member(&mut self, name: &str) -> Result<()> {
        if !matches!(self.state, GateState::Unselected | GateState::MemberChosen) {
            return Err(NoorError::InvalidTransition {
                operation: "choose_member".to_string(),
                state: self.state.to_string(),
            });
        }
        if !self.roster.contains(name) {
            return Err(NoorError::unknown_member(name));
        }
        self.member = Some(name.to_string());
        self.state = GateState::MemberChosen;
        Ok(())
    }

    /// Looks up the stored credential for the chosen member and routes to
    /// the matching PIN prompt: `AwaitingFirstPin` when none exists,
    /// `AwaitingPin` when one does.
    pub async fn submit_credential_lookup(&mut self) -> Result<GateState> {
        let member = self
            .require_state(GateState::MemberChosen, "submit_credential_lookup")?
            .to_string();

        let next = match self.credentials.find(&member).await? {
            Some(_) => GateState::AwaitingPin,
            None => GateState::AwaitingFirstPin,
        };
        self.state = next;
        Ok(next)
    }

    /// First-time setup: validates and persists a new credential, then
    /// authenticates directly (no re-entry required).
    pub async fn set_first_pin(&mut self, pin: &str, confirm_pin: &str) -> Result<()> {
        let member = self
            .require_state(GateState::AwaitingFirstPin, "set_first_pin")?
            .to_string();

        let length = pin.chars().count();
        if length < MIN_PIN_LENGTH {
            return Err(NoorError::PinTooShort {
                actual: length,
                minimum: MIN_PIN_LENGTH,
            });
        }
        if pin != confirm_pin {
            return Err(NoorError::PinMismatch);
        }

        let credential = Credential::new(&member, pin, Utc::now());
        self.credentials.save(&credential).await?;
        self.state = GateState::Authenticated;
        info!(member = %member, "PIN created, member authenticated");
        Ok(())
    }

    /// Compares the submitted PIN against the stored credential. On
    /// mismatch the gate stays in `AwaitingPin` and the caller re-prompts.
    pub async fn submit_pin(&mut self, pin: &str) -> Result<()> {
        let member = self
            .require_state(GateState::AwaitingPin, "submit_pin")?
            .to_string();

        let stored = self.credentials.find(&member).await?.ok_or_else(|| {
            NoorError::storage(format!("credential for '{}' disappeared during authentication", member))
        })?;

        if stored.matches(pin) {
            self.state = GateState::Authenticated;
            info!(member = %member, "member authenticated");
            Ok(())
        } else {
            warn!(member = %member, "invalid PIN");
            Err(NoorError::InvalidPin)
        }
    }
}
