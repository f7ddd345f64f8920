use anchor_lang::prelude::*;

use crate::{
    access,
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    payout,
    state::{EntryLedger, Raffle, Vault},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Position of the winner in the round's ledger
    pub winner_index: u64,
    /// Lamports paid out
    pub amount: u64,
}

/// Randomness callback. Selects the winner, resets the round and pays the
/// entire pool to the winner.
///
/// # Security Considerations
/// Checks, effects, interactions, strictly in that order:
/// 1. Signer must be the registered oracle authority and `request_id` must be
///    the outstanding request
/// 2. Winner, lifecycle, ledger and timestamp are all updated before any
///    lamports move
/// 3. The payout runs under the raffle's payout lock
///
/// Only the first random word is consumed.
///
/// # Account Validations
/// * Winner - Must be the participant selected by `random_words[0] mod N`; the
///   fulfiller derives it off-chain from the ledger and the word it delivers
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    access::require_oracle(&ctx.accounts.raffle, &ctx.accounts.oracle_authority.key())?;
    let random_word = random_words.first().ok_or(RaffleError::MissingRandomWord)?;
    let now = Clock::get()?.unix_timestamp;

    let raffle = &mut ctx.accounts.raffle;
    let ledger_info = ctx.accounts.entry_ledger.to_account_info();
    let settlement = {
        let ledger_data = ledger_info.try_borrow_data()?;
        raffle.settle_round(
            &mut ctx.accounts.entry_ledger,
            &ledger_data,
            request_id,
            random_word,
            now,
        )?
    };
    require_keys_eq!(
        ctx.accounts.winner.key(),
        settlement.winner,
        RaffleError::WinnerAccountMismatch
    );

    emit!(WinnerPicked {
        raffle: raffle.key(),
        winner: settlement.winner,
        winner_index: settlement.winner_index,
        amount: settlement.payout,
    });

    payout::pay_out(
        &mut raffle.payout_locked,
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        settlement.payout,
    )
}

/// Accounts required for the fulfill_random_words instruction
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle awaiting randomness
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Participant table; only the winner's slot is read, then the round is cleared
    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        mut,
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump = entry_ledger.bump,
    )]
    pub entry_ledger: Account<'info, EntryLedger>,

    /// Source of the payout
    /// PDA with seeds ["vault", raffle_key]
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Must be the oracle authority recorded at initialization
    pub oracle_authority: Signer<'info>,

    /// CHECK: compared against the selected participant in the handler
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
