//! End-of-round sweep of the leftover centre cards.

use tracing::debug;

use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;

/// True once the round has no plays left.
pub fn is_round_over(state: &GameState) -> bool {
    matches!(state.phase, Phase::RoundSweep | Phase::RoundScoring)
}

/// Hand the leftover centre to the last capturer and enter `RoundScoring`.
///
/// With no capture in the whole round the leftovers are discarded instead.
/// The sweep is not a capture and never counts as a scopa.
pub fn settle_round(state: &GameState) -> Result<GameState, DomainError> {
    if state.phase != Phase::RoundSweep {
        return Err(DomainError::invalid_state(format!(
            "settle_round requires the RoundSweep phase, phase is {:?}",
            state.phase
        )));
    }

    let mut next = state.clone();
    let leftovers = std::mem::take(&mut next.centre);
    debug!(
        leftovers = leftovers.len(),
        last_capturer = ?next.last_capturer,
        "Settling round"
    );
    match next.last_capturer {
        Some(side) => next.won[side.index()].extend(leftovers),
        None => next.discarded.extend(leftovers),
    }
    next.phase = Phase::RoundScoring;
    Ok(next)
}
