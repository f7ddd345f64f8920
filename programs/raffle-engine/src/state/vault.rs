use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::EntryLedger};

// 8 discriminator, 32 pubkey, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA that custodies every stake until payout.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}

/// Amount the owner may sweep: everything above the rent-exempt reserve, and
/// only while no participant is entered.
pub fn emergency_withdrawal_amount(
    ledger: &EntryLedger,
    vault_lamports: u64,
    rent_exempt_minimum: u64,
) -> Result<u64> {
    require!(ledger.is_empty(), RaffleError::ActiveRoundWithdrawalBlocked);
    let amount = vault_lamports.saturating_sub(rent_exempt_minimum);
    require!(amount > 0, RaffleError::NoFundsToWithdraw);
    Ok(amount)
}
