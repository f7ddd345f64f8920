use std::ops::Range;

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::RaffleError;

const PARTICIPANT_SLOT_SIZE: usize = 32;

/// Current round's participants and the stake they pooled.
///
/// Account layout: `[discriminator | header | slot 0 | slot 1 | ...]`. Only the
/// header below is deserialized when the account is loaded. Participants live
/// after it as raw 32-byte slots in insertion order, so loading the ledger
/// costs the same no matter how many participants are entered.
///
/// Slots at or past `participant_count` are stale and never read. The account
/// grows by one slot per admission (see `enter_raffle`) and is never shrunk: a
/// cleared ledger keeps its allocation for the next round.
#[account]
#[derive(InitSpace)]
pub struct EntryLedger {
    pub raffle: Pubkey,
    pub bump: u8,
    /// Lamports staked in the current round, excluding the vault's rent reserve.
    pub pooled_balance: u64,
    /// Live slots in the participant table. Insertion order is the draw order.
    pub participant_count: u64,
}

impl EntryLedger {
    /// Offset of slot 0 within the account data.
    pub const TABLE_OFFSET: usize = 8 + Self::INIT_SPACE;

    /// Account size required to hold `participant_count` entries.
    pub fn space(participant_count: u64) -> usize {
        Self::TABLE_OFFSET + participant_count as usize * PARTICIPANT_SLOT_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.participant_count == 0
    }

    fn slot(index: u64) -> Option<Range<usize>> {
        let start = usize::try_from(index)
            .ok()?
            .checked_mul(PARTICIPANT_SLOT_SIZE)?
            .checked_add(Self::TABLE_OFFSET)?;
        Some(start..start.checked_add(PARTICIPANT_SLOT_SIZE)?)
    }

    /// Reads participant `index` from the ledger account's data.
    pub fn participant(&self, ledger_data: &[u8], index: u64) -> Result<Pubkey> {
        require!(
            index < self.participant_count,
            RaffleError::ParticipantIndexOutOfBounds
        );
        let bytes = Self::slot(index)
            .and_then(|slot| ledger_data.get(slot))
            .ok_or(RaffleError::LedgerTooSmall)?;
        Ok(Pubkey::new_from_array(*array_ref![bytes, 0, 32]))
    }

    /// Writes `participant` into the next free slot and adds `stake` to the
    /// pool. Admission rules are enforced by `Raffle::admit`.
    pub(crate) fn record(
        &mut self,
        ledger_data: &mut [u8],
        participant: Pubkey,
        stake: u64,
    ) -> Result<()> {
        let pooled_balance = self
            .pooled_balance
            .checked_add(stake)
            .ok_or(RaffleError::Overflow)?;
        let participant_count = self
            .participant_count
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        let slot = Self::slot(self.participant_count)
            .and_then(|slot| ledger_data.get_mut(slot))
            .ok_or(RaffleError::LedgerTooSmall)?;

        slot.copy_from_slice(participant.as_ref());
        self.pooled_balance = pooled_balance;
        self.participant_count = participant_count;
        Ok(())
    }

    /// Empties the ledger and returns the pool it held. Old slots are left in
    /// place and overwritten by the next round.
    pub(crate) fn reset_round(&mut self) -> u64 {
        self.participant_count = 0;
        std::mem::take(&mut self.pooled_balance)
    }
}
