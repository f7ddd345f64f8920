//! Explicit guards invoked at the top of every gated instruction.

use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Raffle};

pub fn require_owner(raffle: &Raffle, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, raffle.owner, RaffleError::Unauthorized);
    Ok(())
}

pub fn require_not_paused(raffle: &Raffle) -> Result<()> {
    require!(!raffle.is_paused, RaffleError::Paused);
    Ok(())
}

/// Capability check for the randomness callback: only the registered oracle
/// authority may deliver random words.
pub fn require_oracle(raffle: &Raffle, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, raffle.oracle_authority, RaffleError::Unauthorized);
    Ok(())
}

/// Owner-only, idempotent write of the pause flag.
pub fn set_paused(raffle: &mut Raffle, caller: &Pubkey, paused: bool) -> Result<()> {
    require_owner(raffle, caller)?;
    raffle.is_paused = paused;
    Ok(())
}
