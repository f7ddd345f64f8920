use anchor_lang::prelude::*;

use crate::{
    access,
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED, VAULT_SEED},
    payout,
    state::{emergency_withdrawal_amount, EntryLedger, Raffle, Vault},
};

/// Event emitted when the owner sweeps the vault
#[event]
pub struct EmergencyWithdraw {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Recipient of the funds
    pub owner: Pubkey,
    /// Amount withdrawn in lamports
    pub amount: u64,
}

/// Sweeps every lamport above the vault's rent reserve to the owner.
///
/// # Security Considerations
/// 1. Owner only
/// 2. Blocked while any participant is entered, so stakes owed to a round
///    can never be swept
/// 3. The vault keeps its rent-exempt minimum
/// 4. Runs under the same payout lock as winner payouts
pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawFunds>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    access::require_owner(&ctx.accounts.raffle, &owner)?;

    let vault = ctx.accounts.vault.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(vault.data_len());
    let amount =
        emergency_withdrawal_amount(&ctx.accounts.entry_ledger, vault.lamports(), rent_reserve)?;

    payout::pay_out(
        &mut ctx.accounts.raffle.payout_locked,
        &vault,
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(EmergencyWithdraw {
        raffle: ctx.accounts.raffle.key(),
        owner,
        amount,
    });

    Ok(())
}

/// Accounts required for the emergency_withdraw instruction
#[derive(Accounts)]
pub struct EmergencyWithdrawFunds<'info> {
    /// The raffle whose vault is swept; holds the payout lock
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Must be empty for the sweep to proceed
    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump = entry_ledger.bump,
    )]
    pub entry_ledger: Account<'info, EntryLedger>,

    /// Source of the sweep, left holding its rent-exempt minimum
    /// PDA with seeds ["vault", raffle_key]
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Must be the raffle owner; receives the funds
    #[account(mut)]
    pub owner: Signer<'info>,
}
