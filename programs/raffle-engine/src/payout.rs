//! Lamport payouts out of the vault.
//!
//! Callers finish every state write before reaching this module; the only
//! thing left to do here is move lamports, under the raffle's payout lock.

use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Runs `interaction` with the payout lock held. The lock is released on
/// every return path, including a failed interaction.
pub fn with_payout_lock<T>(
    locked: &mut bool,
    interaction: impl FnOnce() -> Result<T>,
) -> Result<T> {
    require!(!*locked, RaffleError::PayoutInProgress);
    *locked = true;
    let outcome = interaction();
    *locked = false;
    outcome
}

/// Moves `amount` lamports from the program-owned `vault` to `recipient`.
pub fn pay_out<'info>(
    locked: &mut bool,
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    with_payout_lock(locked, || transfer_lamports(vault, recipient, amount))
}

fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let expected = to
        .lamports()
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;

    // Direct debit only works because the vault is a PDA owned by this program.
    from.sub_lamports(amount)
        .map_err(|_| error!(RaffleError::TransferFailed))?;
    to.add_lamports(amount)
        .map_err(|_| error!(RaffleError::TransferFailed))?;

    require!(to.lamports() == expected, RaffleError::TransferFailed);
    Ok(())
}
