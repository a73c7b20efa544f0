//! Round lifecycle: starting a game and restarting after a finished round.

use tracing::info;

use crate::domain::deck::shuffled_deck;
use crate::domain::seed_derivation::derive_round_seed;
use crate::domain::state::GameState;

/// Start round 1 of a new game, in the `Dealing` phase.
///
/// `None` draws a fresh game seed from the OS-seeded thread RNG; pass a seed
/// to replay a game exactly.
pub fn new_game(seed: Option<u64>) -> GameState {
    let game_seed = seed.unwrap_or_else(rand::random::<u64>);
    start_round(game_seed, 1)
}

/// Discard `previous` and start the next round with a freshly shuffled deck,
/// reset piles and counters.
pub fn restart(previous: &GameState) -> GameState {
    start_round(previous.game_seed, previous.round_no.saturating_add(1))
}

fn start_round(game_seed: u64, round_no: u32) -> GameState {
    let deck = shuffled_deck(derive_round_seed(game_seed, round_no));
    info!(game_seed, round_no, "Starting round");
    GameState::with_deck(deck, game_seed, round_no)
}
