use anchor_lang::prelude::*;

use crate::{
    access,
    constants::*,
    error::RaffleError,
    selection,
    state::EntryLedger,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    Open,
    Calculating,
}

/// Configuration supplied once at initialization. Immutable afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeRaffleParams {
    /// Minimum stake in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between the start of a round and its draw
    pub interval: i64,
    /// Program invoked to request randomness
    pub vrf_coordinator: Pubkey,
    /// Only identity allowed to call `fulfill_random_words`
    pub oracle_authority: Pubkey,
    /// Coordinator lane (gas/fee tier) identifier
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    pub owner: Pubkey,
    pub vrf_coordinator: Pubkey,
    pub oracle_authority: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub entrance_fee: u64,
    pub interval: i64,
    pub last_timestamp: i64,
    pub state: RaffleState,
    /// `Pubkey::default()` until the first round completes
    pub recent_winner: Pubkey,
    /// Correlation handle of the outstanding randomness request
    pub pending_request: Option<u64>,
    pub is_paused: bool,
    /// Held for the duration of a lamport payout
    pub payout_locked: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + Raffle::INIT_SPACE;

/// Result of `check_upkeep`. The diagnostic triple mirrors what a rejected
/// `perform_upkeep` logs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub balance: u64,
    pub participant_count: u64,
    pub state: RaffleState,
    /// Reserved, always empty
    pub perform_data: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSnapshot {
    pub owner: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
    pub state: RaffleState,
    pub participant_count: u64,
    pub pooled_balance: u64,
    pub last_timestamp: i64,
    pub recent_winner: Pubkey,
    pub subscription_id: u64,
    pub pending_request: Option<u64>,
    pub is_paused: bool,
}

/// Outcome of a settled round, produced before any lamports move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettlement {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub payout: u64,
}

impl Raffle {
    pub fn configure(
        &mut self,
        owner: Pubkey,
        params: &InitializeRaffleParams,
        bump: u8,
        vault_bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(
            params.interval > 0 && params.interval <= MAX_INTERVAL,
            RaffleError::InvalidInterval
        );
        require!(
            (MIN_REQUEST_CONFIRMATIONS..=MAX_REQUEST_CONFIRMATIONS)
                .contains(&params.request_confirmations),
            RaffleError::InvalidRequestConfirmations
        );
        require!(
            params.callback_compute_limit > 0
                && params.callback_compute_limit <= MAX_CALLBACK_COMPUTE_LIMIT,
            RaffleError::InvalidCallbackComputeLimit
        );

        self.owner = owner;
        self.vrf_coordinator = params.vrf_coordinator;
        self.oracle_authority = params.oracle_authority;
        self.key_hash = params.key_hash;
        self.subscription_id = params.subscription_id;
        self.request_confirmations = params.request_confirmations;
        self.callback_compute_limit = params.callback_compute_limit;
        self.entrance_fee = params.entrance_fee;
        self.interval = params.interval;
        self.last_timestamp = now;
        self.state = RaffleState::Open;
        self.recent_winner = Pubkey::default();
        self.pending_request = None;
        self.is_paused = false;
        self.payout_locked = false;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Admits `participant` into the current round. Nothing is written unless
    /// every check passes.
    pub fn admit(
        &self,
        ledger: &mut EntryLedger,
        ledger_data: &mut [u8],
        participant: Pubkey,
        stake: u64,
    ) -> Result<()> {
        access::require_not_paused(self)?;
        require!(stake >= self.entrance_fee, RaffleError::InsufficientStake);
        require!(self.state == RaffleState::Open, RaffleError::NotOpen);
        ledger.record(ledger_data, participant, stake)
    }

    /// Eligibility verdict for the next round. `upkeep_needed` holds only when
    /// the raffle is open, the interval has elapsed and the round has both
    /// participants and a positive pool.
    pub fn upkeep_status(&self, ledger: &EntryLedger, now: i64) -> UpkeepStatus {
        let is_open = self.state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_balance = ledger.pooled_balance > 0;
        let has_players = !ledger.is_empty();

        UpkeepStatus {
            upkeep_needed: is_open && time_passed && has_balance && has_players,
            balance: ledger.pooled_balance,
            participant_count: ledger.participant_count,
            state: self.state,
            perform_data: Vec::new(),
        }
    }

    /// OPEN -> CALCULATING. Must run before the randomness request is issued
    /// so no second round can start while one is outstanding.
    pub fn begin_round(&mut self, ledger: &EntryLedger, now: i64) -> Result<()> {
        access::require_not_paused(self)?;
        let status = self.upkeep_status(ledger, now);
        if !status.upkeep_needed {
            msg!(
                "UpkeepNotNeeded: balance={} participants={} state={:?}",
                status.balance,
                status.participant_count,
                status.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }
        self.state = RaffleState::Calculating;
        Ok(())
    }

    pub fn record_request(&mut self, request_id: u64) {
        self.pending_request = Some(request_id);
    }

    /// Applies every effect of a fulfilled round and reports who gets paid
    /// how much. The caller moves the lamports afterwards.
    pub fn settle_round(
        &mut self,
        ledger: &mut EntryLedger,
        ledger_data: &[u8],
        request_id: u64,
        random_word: &[u8; 32],
        now: i64,
    ) -> Result<RoundSettlement> {
        require!(
            self.state == RaffleState::Calculating && self.pending_request == Some(request_id),
            RaffleError::InvalidCorrelation
        );
        let winner_index = selection::winner_index(random_word, ledger.participant_count)
            .ok_or(RaffleError::NoParticipants)?;
        let winner = ledger.participant(ledger_data, winner_index)?;

        self.recent_winner = winner;
        self.state = RaffleState::Open;
        self.pending_request = None;
        self.last_timestamp = now;
        let payout = ledger.reset_round();

        Ok(RoundSettlement {
            winner,
            winner_index,
            payout,
        })
    }

    pub fn snapshot(&self, ledger: &EntryLedger) -> RaffleSnapshot {
        RaffleSnapshot {
            owner: self.owner,
            entrance_fee: self.entrance_fee,
            interval: self.interval,
            state: self.state,
            participant_count: ledger.participant_count,
            pooled_balance: ledger.pooled_balance,
            last_timestamp: self.last_timestamp,
            recent_winner: self.recent_winner,
            subscription_id: self.subscription_id,
            pending_request: self.pending_request,
            is_paused: self.is_paused,
        }
    }
}
