//! Domain layer: pure game logic types and helpers.

pub mod capture;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod game_transition;
pub mod play;
pub mod player_view;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod settlement;
pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;

#[cfg(test)]
mod tests_play;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_settlement;

// Re-exports for ergonomics
pub use capture::{compute_options, Capture};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Suit};
pub use dealing::{deal_all, deal_next};
pub use game_transition::{derive_transitions, GameTransition};
pub use play::{apply_move, options_for, play_card, resolve_capture_choice, Move, PlayOutcome};
pub use player_view::VisibleState;
pub use round::{new_game, restart};
pub use scoring::{compute_score, find_winner, Outcome, ScoreBreakdown};
pub use seed_derivation::{derive_ai_seed, derive_round_seed};
pub use settlement::{is_round_over, settle_round};
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{check_conservation, GameState, Phase, Side};
