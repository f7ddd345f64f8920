/// Reduces a 256-bit big-endian random word modulo `participant_count`.
///
/// Plain modulo selection: uniform only when the count divides 2^256, the
/// residual bias for other counts is accepted. Returns `None` for an empty
/// round.
pub fn winner_index(random_word: &[u8; 32], participant_count: u64) -> Option<u64> {
    if participant_count == 0 {
        return None;
    }
    let modulus = u128::from(participant_count);
    let remainder = random_word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | u128::from(*byte)) % modulus);
    // remainder < participant_count, so it fits
    Some(remainder as u64)
}
