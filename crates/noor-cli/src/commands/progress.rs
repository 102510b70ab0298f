use anyhow::{anyhow, Result};
use colored::Colorize;

use noor_core::auth::{GateState, PinGate};
use noor_core::progress::Position;
use noor_application::TrackerUsecase;

use super::AppContext;

/// Runs the full PIN-gate flow for `member` and returns an authenticated
/// gate: first-time setup when no credential exists (requires
/// `confirm_pin`), normal PIN entry otherwise.
async fn authenticate(
    context: &AppContext,
    member: &str,
    pin: &str,
    confirm_pin: Option<&str>,
) -> Result<PinGate> {
    let mut gate = PinGate::new(context.roster.clone(), context.credentials.clone());
    gate.choose_member(member)?;

    match gate.submit_credential_lookup().await? {
        GateState::AwaitingFirstPin => {
            let confirm = confirm_pin.ok_or_else(|| {
                anyhow!(
                    "first time setup for '{}': repeat the PIN with --confirm-pin to create it",
                    member
                )
            })?;
            gate.set_first_pin(pin, confirm).await?;
            println!("{}", format!("PIN created for {} 🔐", member).green());
        }
        GateState::AwaitingPin => {
            if confirm_pin.is_some() {
                println!(
                    "{}",
                    format!("{} already has a PIN; --confirm-pin ignored", member).dimmed()
                );
            }
            gate.submit_pin(pin).await?;
        }
        state => return Err(anyhow!("unexpected gate state {}", state)),
    }

    Ok(gate)
}

pub async fn save(
    context: &AppContext,
    member: &str,
    pin: &str,
    confirm_pin: Option<&str>,
    position: Position,
) -> Result<()> {
    let gate = authenticate(context, member, pin, confirm_pin).await?;

    let usecase = TrackerUsecase::new(context.store.clone());
    let record = usecase.update_progress(&gate, member, position).await?;

    println!(
        "{}",
        format!("Progress updated! {}: {}", member, record.position()).green()
    );
    Ok(())
}

pub async fn reset(context: &AppContext, member: &str, pin: &str) -> Result<()> {
    let gate = authenticate(context, member, pin, None).await?;

    let usecase = TrackerUsecase::new(context.store.clone());
    usecase.reset_progress(&gate, member).await?;

    println!(
        "{}",
        format!("{}'s progress has been reset.", member).yellow()
    );
    Ok(())
}
