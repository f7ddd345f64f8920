use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use crate::{
    error::RaffleError,
    state::{EntryLedger, InitializeRaffleParams, Raffle, RaffleState},
};

pub const ENTRANCE_FEE: u64 = 1_000_000;
pub const INTERVAL: i64 = 30;
pub const LEDGER_CAPACITY: u64 = 64;

pub fn assert_raffle_err<T: std::fmt::Debug>(result: Result<T>, expected: RaffleError) {
    let message = format!("expected {expected:?}");
    let err = result.expect_err(&message);
    assert_eq!(
        ProgramError::from(err),
        ProgramError::Custom(u32::from(expected)),
        "{message}"
    );
}

pub fn params() -> InitializeRaffleParams {
    InitializeRaffleParams {
        entrance_fee: ENTRANCE_FEE,
        interval: INTERVAL,
        vrf_coordinator: Pubkey::new_unique(),
        oracle_authority: Pubkey::new_unique(),
        key_hash: [7; 32],
        subscription_id: 11,
        request_confirmations: 3,
        callback_compute_limit: 200_000,
    }
}

pub fn open_raffle(now: i64) -> Raffle {
    let mut raffle = Raffle {
        owner: Pubkey::default(),
        vrf_coordinator: Pubkey::default(),
        oracle_authority: Pubkey::default(),
        key_hash: [0; 32],
        subscription_id: 0,
        request_confirmations: 0,
        callback_compute_limit: 0,
        entrance_fee: 0,
        interval: 0,
        last_timestamp: 0,
        state: RaffleState::Calculating,
        recent_winner: Pubkey::new_unique(),
        pending_request: Some(0),
        is_paused: true,
        payout_locked: true,
        bump: 0,
        vault_bump: 0,
    };
    raffle
        .configure(Pubkey::new_unique(), &params(), 254, 253, now)
        .unwrap();
    raffle
}

/// Zeroed ledger account data with room for `capacity` participants.
pub fn ledger_data(capacity: u64) -> Vec<u8> {
    vec![0u8; EntryLedger::space(capacity)]
}

/// Empty ledger header plus account data sized for `LEDGER_CAPACITY` entries.
pub fn empty_ledger() -> (EntryLedger, Vec<u8>) {
    let ledger = EntryLedger {
        raffle: Pubkey::new_unique(),
        bump: 252,
        pooled_balance: 0,
        participant_count: 0,
    };
    (ledger, ledger_data(LEDGER_CAPACITY))
}

pub fn participants(ledger: &EntryLedger, data: &[u8]) -> Vec<Pubkey> {
    (0..ledger.participant_count)
        .map(|index| ledger.participant(data, index).unwrap())
        .collect()
}

/// Writable, non-signer account over caller-owned lamports and data.
pub fn account_info<'a>(
    key: &'a Pubkey,
    owner: &'a Pubkey,
    lamports: &'a mut u64,
    data: &'a mut [u8],
) -> AccountInfo<'a> {
    AccountInfo::new(key, false, true, lamports, data, owner, false, 0)
}

/// 256-bit big-endian word holding `value`.
pub fn word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
