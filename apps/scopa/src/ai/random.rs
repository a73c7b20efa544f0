//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline opponent for the simulator and the
//! reference for AI implementations: it keeps its RNG behind a `Mutex`
//! because `AiPlayer` methods take `&self`, supports optional seeding for
//! reproducible runs, and only ever picks from `VisibleState::legal_moves`.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::VisibleState;
use crate::domain::Move;

/// AI that picks uniformly among all legal moves.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible choices; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, state: &VisibleState) -> Result<Move, AiError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal moves available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| AiError::Internal("Failed to choose random move".into()))
    }
}
