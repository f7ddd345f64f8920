use anchor_lang::prelude::*;
use instructions::*;
use state::InitializeRaffleParams;

pub mod access;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod oracle;
pub mod payout;
pub mod selection;
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("HuSEEHqJzws7bo4Sy1ZxBvhT4Ytu73pidkx9CHhjJvL4");

#[program]
pub mod raffle_engine {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeRaffleParams) -> Result<()> {
        instructions::initialize::initialize(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, stake: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, stake)
    }

    pub fn check_upkeep(
        ctx: Context<ReadRaffle>,
        check_data: Vec<u8>,
    ) -> Result<state::UpkeepStatus> {
        instructions::read_raffle::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep<'info>(
        ctx: Context<'_, '_, 'info, 'info, PerformUpkeep<'info>>,
        perform_data: Vec<u8>,
    ) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn pause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::pause::unpause(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawFunds>) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx)
    }

    pub fn get_participant(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        instructions::read_raffle::get_participant(ctx, index)
    }

    pub fn get_raffle_snapshot(ctx: Context<ReadRaffle>) -> Result<state::RaffleSnapshot> {
        instructions::read_raffle::get_raffle_snapshot(ctx)
    }
}
