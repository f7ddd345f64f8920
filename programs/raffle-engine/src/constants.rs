// PDA seeds
pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const ENTRY_LEDGER_SEED: &[u8] = b"entry_ledger";
pub const VAULT_SEED: &[u8] = b"vault";

/// Every round consumes exactly one random word.
pub const NUM_WORDS: u32 = 1;

// Bounds enforced on the raffle configuration at initialization
pub const MAX_INTERVAL: i64 = 365 * 24 * 60 * 60; // 1 year in seconds
pub const MIN_REQUEST_CONFIRMATIONS: u16 = 3;
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
pub const MAX_CALLBACK_COMPUTE_LIMIT: u32 = 1_400_000;

/// Instruction name the VRF coordinator exposes for randomness requests.
pub const REQUEST_RANDOM_WORDS_IX: &str = "request_random_words";
