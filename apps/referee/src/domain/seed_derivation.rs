//! RNG seed derivation for deterministic matches.
//!
//! A match carries one base seed; every deal and every seeded bot gets its own
//! seed derived from it so that replays are exact.

/// Derive the shuffle seed for deal `deal_no` (1-based) of a match.
pub fn derive_dealing_seed(match_seed: u64, deal_no: u32) -> u64 {
    // Different multiplier from the bot seed to keep the streams apart
    match_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive the seed for a randomised bot sitting in `seat`.
pub fn derive_bot_seed(match_seed: u64, seat: u8) -> u64 {
    match_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
