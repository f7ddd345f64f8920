use anchor_lang::prelude::*;

use crate::{
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED},
    state::{EntryLedger, Raffle, RaffleSnapshot, UpkeepStatus},
};

/// Read-only eligibility check for the external scheduler. Returns the
/// verdict together with the balance, participant count and lifecycle state.
pub fn check_upkeep(ctx: Context<ReadRaffle>, _check_data: Vec<u8>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx
        .accounts
        .raffle
        .upkeep_status(&ctx.accounts.entry_ledger, now))
}

pub fn get_participant(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    let ledger_info = ctx.accounts.entry_ledger.to_account_info();
    let ledger_data = ledger_info.try_borrow_data()?;
    ctx.accounts.entry_ledger.participant(&ledger_data, index)
}

pub fn get_raffle_snapshot(ctx: Context<ReadRaffle>) -> Result<RaffleSnapshot> {
    Ok(ctx.accounts.raffle.snapshot(&ctx.accounts.entry_ledger))
}

/// Accounts shared by the read-only instructions
#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump = entry_ledger.bump,
    )]
    pub entry_ledger: Account<'info, EntryLedger>,
}
