//! In-memory round simulator for AI evaluation.
//!
//! Rounds are chained the way a player session chains them: the first comes
//! from `new_game`, each later one from `restart`, so one game seed replays
//! the whole run.

use scopa::ai::{create_ai, AiPlayer};
use scopa::domain::{derive_ai_seed, new_game, restart, GameState, Outcome, ScoreBreakdown};
use scopa::services::game_flow::play_round;
use serde_json::json;
use tracing::debug;

use crate::types::{AiType, SimulatorError};

/// Result of simulating one round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub round_no: u32,
    pub game_seed: u64,
    pub outcome: Outcome,
    pub lower: ScoreBreakdown,
    pub upper: ScoreBreakdown,
    pub plays: usize,
}

/// Plays consecutive rounds between two AI types.
pub struct Simulator {
    ai_types: [AiType; 2],
    next: GameState,
}

impl Simulator {
    pub fn new(game_seed: Option<u64>, ai_types: [AiType; 2]) -> Self {
        Self {
            ai_types,
            next: new_game(game_seed),
        }
    }

    pub fn game_seed(&self) -> u64 {
        self.next.game_seed
    }

    /// Play the pending round and queue the one after it.
    pub fn simulate_round(&mut self) -> Result<RoundResult, SimulatorError> {
        let round_no = self.next.round_no;
        let game_seed = self.next.game_seed;
        let lower = self.make_ai(0, round_no)?;
        let upper = self.make_ai(1, round_no)?;

        let report = play_round(&self.next, [lower.as_ref(), upper.as_ref()])
            .map_err(|source| SimulatorError::Round { round_no, source })?;
        debug!(round_no, plays = report.plays, "Simulated round");

        self.next = restart(&report.state);
        Ok(RoundResult {
            round_no,
            game_seed,
            outcome: report.outcome,
            lower: report.lower,
            upper: report.upper,
            plays: report.plays,
        })
    }

    fn make_ai(&self, seat: usize, round_no: u32) -> Result<Box<dyn AiPlayer>, SimulatorError> {
        let name = self.ai_types[seat].name();
        let seed = derive_ai_seed(self.next.game_seed, round_no, seat);
        create_ai(name, Some(&json!({ "seed": seed })))
            .ok_or_else(|| SimulatorError::UnknownAi(name.to_string()))
    }
}
