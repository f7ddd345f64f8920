use anchor_lang::prelude::*;

use crate::{
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED},
    error::RaffleError,
    oracle::{self, RandomWordsRequest},
    state::{EntryLedger, Raffle},
};

/// Event emitted when a round is closed and randomness is requested
#[event]
pub struct RandomnessRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Correlation handle returned by the VRF coordinator
    pub request_id: u64,
}

/// Starts the draw for the current round. Callable by anyone, typically an
/// external scheduler after `check_upkeep` reports `upkeep_needed`.
///
/// # Security Considerations
/// 1. Rejected while paused
/// 2. Rejected with `UpkeepNotNeeded` unless the raffle is open, the interval
///    has elapsed and the round has both participants and balance
/// 3. The raffle is moved to Calculating and persisted before the coordinator
///    is invoked, so at most one request is ever outstanding
///
/// # Account Validations
/// * VrfCoordinator - Must be the executable program configured at initialization
/// * Remaining accounts - Forwarded untouched to the coordinator (subscription,
///   consumer registration, request account, ...)
pub fn perform_upkeep<'info>(
    ctx: Context<'_, '_, 'info, 'info, PerformUpkeep<'info>>,
    _perform_data: Vec<u8>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle = &mut ctx.accounts.raffle;

    raffle.begin_round(&ctx.accounts.entry_ledger, now)?;
    raffle.exit(&crate::ID)?;

    let request = RandomWordsRequest::for_raffle(raffle);
    let owner = raffle.owner;
    let bump = [raffle.bump];
    let consumer_seeds: &[&[u8]] = &[RAFFLE_SEED, owner.as_ref(), &bump];

    let request_id = oracle::request_random_words(
        &ctx.accounts.vrf_coordinator.to_account_info(),
        &raffle.to_account_info(),
        &ctx.accounts.payer.to_account_info(),
        ctx.remaining_accounts,
        &request,
        consumer_seeds,
    )?;
    raffle.record_request(request_id);

    emit!(RandomnessRequested {
        raffle: raffle.key(),
        request_id,
    });

    Ok(())
}

/// Accounts required for the perform_upkeep instruction
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle whose round is closed; also the consumer that signs the request
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Read for the eligibility check only
    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump = entry_ledger.bump,
    )]
    pub entry_ledger: Account<'info, EntryLedger>,

    /// Pays whatever the coordinator charges for creating the request
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: pinned to the coordinator stored in the raffle
    #[account(
        executable,
        address = raffle.vrf_coordinator @ RaffleError::InvalidCoordinator,
    )]
    pub vrf_coordinator: UncheckedAccount<'info>,
}
