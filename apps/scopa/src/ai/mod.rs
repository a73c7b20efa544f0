//! AI player module - handles the computer's decisions.
//!
//! This module provides:
//! - `AiPlayer` trait for different AI implementations
//! - `Heuristic`: the deterministic priority-weighing opponent
//! - `RandomPlayer`: random legal moves (seedable for tests and simulation)
//! - A static registry and JSON-backed config

pub mod config;
pub mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::{AiConfig, PriorityWeights};
pub use heuristic::{Heuristic, SumCombiner, WeightCombiner, WeightedCombiner};
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

use crate::domain::player_view::VisibleState;
use crate::domain::state::{require_awaiting_play, GameState, Phase};
use crate::domain::Move;
use crate::errors::domain::DomainError;

/// Create an AI player by registered name and optional JSON config.
///
/// Returns None if the name is unrecognized.
pub fn create_ai(name: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let factory = by_name(name)?;
    Some((factory.make)(&AiConfig::from_json(config)))
}

/// The heuristic's move for the side to act. Computes only; nothing is applied.
///
/// On a pending capture choice the played card is fixed and the best-weighted
/// of the offered captures is returned (first maximum wins); its position in
/// `options` is the index for `resolve_capture_choice`.
pub fn ai_choose_move(state: &GameState) -> Result<Move, DomainError> {
    let heuristic = Heuristic::new(None);
    if let Phase::AwaitingCaptureChoice {
        side,
        played,
        options,
    } = &state.phase
    {
        let view = VisibleState::for_side(state, *side);
        let mut best: Option<(i64, Move)> = None;
        for option in options {
            let mv = Move::capture(*played, option.clone());
            let weight = heuristic.weigh(&view, &mv);
            if best.as_ref().map_or(true, |(w, _)| weight > *w) {
                best = Some((weight, mv));
            }
        }
        return best.map(|(_, mv)| mv).ok_or_else(|| {
            DomainError::invariant(format!("Capture choice for {played} offers no options"))
        });
    }

    let side = require_awaiting_play(state, "ai_choose_move")?;
    let view = VisibleState::for_side(state, side);
    Ok(heuristic.choose_move(&view)?)
}
