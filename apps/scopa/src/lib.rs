#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use ai::{ai_choose_move, create_ai, AiConfig, AiError, AiPlayer, Heuristic, RandomPlayer};
pub use domain::{
    compute_options, compute_score, deal_next, derive_transitions, find_winner, is_round_over,
    new_game, options_for, play_card, resolve_capture_choice, restart, settle_round, snapshot,
    Capture, Card, GameState, Move, Outcome, Phase, PlayOutcome, ScoreBreakdown, Side, Suit,
};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scopa_test_support::logging::init();
}
