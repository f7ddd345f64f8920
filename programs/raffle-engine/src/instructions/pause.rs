use anchor_lang::prelude::*;

use crate::{access, constants::RAFFLE_SEED, state::Raffle};

#[event]
pub struct Paused {
    pub raffle: Pubkey,
    pub by: Pubkey,
}

#[event]
pub struct Unpaused {
    pub raffle: Pubkey,
    pub by: Pubkey,
}

/// Stops new entries and new rounds. A pending draw can still be fulfilled.
pub fn pause(ctx: Context<AdminAction>) -> Result<()> {
    let by = ctx.accounts.owner.key();
    access::set_paused(&mut ctx.accounts.raffle, &by, true)?;

    emit!(Paused {
        raffle: ctx.accounts.raffle.key(),
        by,
    });
    Ok(())
}

pub fn unpause(ctx: Context<AdminAction>) -> Result<()> {
    let by = ctx.accounts.owner.key();
    access::set_paused(&mut ctx.accounts.raffle, &by, false)?;

    emit!(Unpaused {
        raffle: ctx.accounts.raffle.key(),
        by,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// PDA with seeds ["raffle", owner_key]
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.owner.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Must be the raffle owner
    pub owner: Signer<'info>,
}
