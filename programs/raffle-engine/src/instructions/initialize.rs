use anchor_lang::prelude::*;

use crate::{
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED, VAULT_SEED},
    state::{
        EntryLedger, InitializeRaffleParams, Raffle, Vault, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE,
    },
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Owner allowed to pause, unpause and emergency withdraw
    pub owner: Pubkey,
    /// Minimum stake in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between rounds
    pub interval: i64,
    /// VRF subscription charged for randomness requests
    pub subscription_id: u64,
}

/// Creates a raffle together with its entry ledger and vault.
///
/// # Security Considerations
/// 1. The signer becomes the immutable owner
/// 2. Entrance fee, interval, confirmations and callback budget are range checked
/// 3. The oracle authority recorded here is the only identity that can ever
///    deliver randomness for this raffle
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle", owner]
/// * EntryLedger - New PDA with seeds ["entry_ledger", raffle], starts empty
/// * Vault - New PDA with seeds ["vault", raffle], holds stakes on top of rent
pub fn initialize(ctx: Context<Initialize>, params: InitializeRaffleParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let owner = ctx.accounts.owner.key();

    ctx.accounts
        .raffle
        .configure(owner, &params, ctx.bumps.raffle, ctx.bumps.vault, now)?;

    let entry_ledger = &mut ctx.accounts.entry_ledger;
    entry_ledger.raffle = raffle_key;
    entry_ledger.bump = ctx.bumps.entry_ledger;
    entry_ledger.pooled_balance = 0;
    entry_ledger.participant_count = 0;

    ctx.accounts.vault.raffle = raffle_key;
    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(RaffleInitialized {
        raffle: raffle_key,
        owner,
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        subscription_id: params.subscription_id,
    });

    Ok(())
}

/// Accounts required for the initialize instruction
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Raffle configuration and lifecycle state
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        init,
        payer = owner,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED, owner.key().as_ref()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Participant table for the current round, created with no slots
    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        init,
        payer = owner,
        space = EntryLedger::space(0),
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump
    )]
    pub entry_ledger: Account<'info, EntryLedger>,

    /// Custody account for every stake
    /// PDA with seeds ["vault", raffle_key]
    #[account(
        init,
        payer = owner,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Becomes the raffle owner and pays rent for all three accounts
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Required for creating the accounts
    pub system_program: Program<'info, System>,
}
