//! RNG seed derivation for deterministic rounds and AI players.
//!
//! Every per-round shuffle and every seeded AI draws its seed from the one
//! game seed, so a whole session replays from a single number.

/// Derive the shuffle seed for a round.
///
/// Same game seed and round number give the same deck; consecutive rounds of
/// one game get distinct decks.
pub fn derive_round_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive the seed of a randomised AI seated on `seat` (0 lower, 1 upper).
pub fn derive_ai_seed(game_seed: u64, round_no: u32, seat: usize) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
