use anchor_lang::prelude::*;

use crate::{
    constants::{ENTRY_LEDGER_SEED, RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{EntryLedger, Raffle, Vault},
};

/// Event emitted when a participant is admitted into the current round
#[event]
pub struct EntryRecorded {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The participant's address
    pub participant: Pubkey,
    /// Lamports staked
    pub stake: u64,
}

/// Admits the signer into the current round with a stake of `stake` lamports.
///
/// # Security Considerations
/// 1. Rejected while paused, below the entrance fee, or while a draw is pending
/// 2. The ledger is updated before the stake is transferred
/// 3. The vault balance is compared before and after the transfer
///
/// # Account Validations
/// * EntryLedger - Grown by one 32-byte slot, rent top-up paid by the participant.
///   Never shrunk, so a ledger reused after a cleared round keeps its size.
///   Only the header is deserialized; the participant is written straight into
///   its slot in the account data.
/// * Vault - Must be the raffle's vault PDA
pub fn enter_raffle(ctx: Context<EnterRaffle>, stake: u64) -> Result<()> {
    let participant = ctx.accounts.player.key();

    let ledger_info = ctx.accounts.entry_ledger.to_account_info();
    {
        let mut ledger_data = ledger_info.try_borrow_mut_data()?;
        ctx.accounts.raffle.admit(
            &mut ctx.accounts.entry_ledger,
            &mut ledger_data,
            participant,
            stake,
        )?;
    }

    let vault = ctx.accounts.vault.to_account_info();
    let pre_transfer_balance = vault.lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(&participant, vault.key, stake),
        &[
            ctx.accounts.player.to_account_info(),
            vault.clone(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    let post_transfer_balance = vault.lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(stake)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(EntryRecorded {
        raffle: ctx.accounts.raffle.key(),
        participant,
        stake,
    });

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle being entered
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Participant table, grown to hold one more slot before the handler runs
    /// PDA with seeds ["entry_ledger", raffle_key]
    #[account(
        mut,
        seeds = [ENTRY_LEDGER_SEED, raffle.key().as_ref()],
        bump = entry_ledger.bump,
        realloc = EntryLedger::space(entry_ledger.participant_count + 1)
            .max(entry_ledger.to_account_info().data_len()),
        realloc::payer = player,
        realloc::zero = false,
    )]
    pub entry_ledger: Account<'info, EntryLedger>,

    /// Receives the stake
    /// PDA with seeds ["vault", raffle_key]
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The participant, paying both the stake and the ledger's rent top-up
    #[account(mut)]
    pub player: Signer<'info>,

    /// Required for the stake transfer and the ledger realloc
    pub system_program: Program<'info, System>,
}
