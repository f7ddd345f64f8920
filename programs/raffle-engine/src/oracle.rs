//! Client side of the VRF coordinator: builds the randomness request CPI and
//! reads back the request id the coordinator returns.
//!
//! The coordinator is expected to expose an Anchor instruction named
//! `request_random_words`, to set its return data to the little-endian `u64`
//! request id, and to later invoke `fulfill_random_words` on this program
//! exactly once per accepted request, signed by the raffle's oracle authority.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::{get_return_data, invoke_signed},
};
use arrayref::array_ref;

use crate::{
    constants::{NUM_WORDS, REQUEST_RANDOM_WORDS_IX},
    error::RaffleError,
    state::Raffle,
};

/// Borsh payload of `request_random_words`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomWordsRequest {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

impl RandomWordsRequest {
    pub fn for_raffle(raffle: &Raffle) -> Self {
        Self {
            key_hash: raffle.key_hash,
            subscription_id: raffle.subscription_id,
            request_confirmations: raffle.request_confirmations,
            callback_compute_limit: raffle.callback_compute_limit,
            num_words: NUM_WORDS,
        }
    }
}

/// Anchor sighash of the coordinator's request instruction.
pub fn request_discriminator() -> [u8; 8] {
    let preimage = format!("global:{REQUEST_RANDOM_WORDS_IX}");
    let digest = hash(preimage.as_bytes()).to_bytes();
    *array_ref![digest, 0, 8]
}

/// Account order: consumer (raffle PDA, signer), payer (signer, writable),
/// then every forwarded account with its own flags.
pub fn request_instruction(
    coordinator: Pubkey,
    consumer: Pubkey,
    payer: Pubkey,
    forwarded: &[AccountInfo],
    request: &RandomWordsRequest,
) -> Result<Instruction> {
    let mut data = request_discriminator().to_vec();
    request
        .serialize(&mut data)
        .map_err(|_| error!(RaffleError::RandomnessRequestFailed))?;

    let mut accounts = Vec::with_capacity(forwarded.len() + 2);
    accounts.push(AccountMeta::new_readonly(consumer, true));
    accounts.push(AccountMeta::new(payer, true));
    accounts.extend(forwarded.iter().map(|info| AccountMeta {
        pubkey: *info.key,
        is_signer: info.is_signer,
        is_writable: info.is_writable,
    }));

    Ok(Instruction {
        program_id: coordinator,
        accounts,
        data,
    })
}

/// Extracts the request id from the coordinator's CPI return data.
pub fn parse_request_id(
    coordinator: &Pubkey,
    return_data: Option<(Pubkey, Vec<u8>)>,
) -> Result<u64> {
    let (program_id, data) = return_data.ok_or(RaffleError::RandomnessRequestFailed)?;
    require_keys_eq!(program_id, *coordinator, RaffleError::RandomnessRequestFailed);
    require!(data.len() >= 8, RaffleError::RandomnessRequestFailed);
    Ok(u64::from_le_bytes(*array_ref![data, 0, 8]))
}

/// Issues one randomness request, signed by the raffle PDA, and returns the
/// correlation handle. Any coordinator failure aborts the caller.
pub fn request_random_words<'info>(
    coordinator: &AccountInfo<'info>,
    consumer: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    request: &RandomWordsRequest,
    consumer_seeds: &[&[u8]],
) -> Result<u64> {
    let ix = request_instruction(*coordinator.key, *consumer.key, *payer.key, forwarded, request)?;

    let mut infos = Vec::with_capacity(forwarded.len() + 3);
    infos.push(consumer.clone());
    infos.push(payer.clone());
    infos.extend_from_slice(forwarded);
    infos.push(coordinator.clone());

    invoke_signed(&ix, &infos, &[consumer_seeds])?;

    let request_id = parse_request_id(coordinator.key, get_return_data())?;
    msg!("VRF request {} issued on subscription {}", request_id, request.subscription_id);
    Ok(request_id)
}
