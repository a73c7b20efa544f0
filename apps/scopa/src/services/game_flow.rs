//! Round driver: composes the pure engine operations into whole rounds.
//!
//! The presentation layer drives a human seat step by step through the
//! domain API; this service covers the automated side of a round (dealing,
//! AI turns, settlement) and is what the simulator uses to play headless
//! rounds between two AIs.

use tracing::{debug, info};

use crate::ai::AiPlayer;
use crate::domain::dealing::deal_all;
use crate::domain::play::apply_move;
use crate::domain::player_view::VisibleState;
use crate::domain::scoring::{find_winner, Outcome, ScoreBreakdown};
use crate::domain::settlement::settle_round;
use crate::domain::state::{check_conservation, require_awaiting_play, GameState, Phase, Side};
use crate::errors::domain::DomainError;

/// Upper bound on driver steps per round; a legal round needs far fewer.
const MAX_STEPS_PER_ROUND: usize = 200;

/// Summary of a round played to completion.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub state: GameState,
    pub outcome: Outcome,
    pub lower: ScoreBreakdown,
    pub upper: ScoreBreakdown,
    pub plays: usize,
}

/// Deal until the current deal is complete.
pub fn advance_dealing(state: &GameState) -> Result<GameState, DomainError> {
    let dealt = deal_all(state)?;
    debug!(
        round_no = dealt.round_no,
        deck_remaining = dealt.deck.len(),
        "Deal complete"
    );
    Ok(dealt)
}

/// Ask `ai` for the acting side's move and apply it.
pub fn take_ai_turn(state: &GameState, ai: &dyn AiPlayer) -> Result<GameState, DomainError> {
    let side = require_awaiting_play(state, "take_ai_turn")?;
    let view = VisibleState::for_side(state, side);
    let mv = ai.choose_move(&view)?;
    debug!(
        side = %side,
        card = %mv.card,
        captured = mv.capture.as_ref().map_or(0, |c| c.len()),
        "AI move chosen"
    );
    apply_move(state, &mv)
}

/// Play `state` to `RoundScoring` with `players[Side::index]` acting for each side.
pub fn play_round(
    state: &GameState,
    players: [&dyn AiPlayer; 2],
) -> Result<RoundReport, DomainError> {
    info!(
        round_no = state.round_no,
        game_seed = state.game_seed,
        "Round started"
    );

    let mut current = state.clone();
    let mut plays = 0usize;
    for _ in 0..MAX_STEPS_PER_ROUND {
        current = match &current.phase {
            Phase::Dealing => advance_dealing(&current)?,
            Phase::AwaitingPlay { side } => {
                plays += 1;
                take_ai_turn(&current, players[side.index()])?
            }
            Phase::AwaitingCaptureChoice { side, .. } => {
                return Err(DomainError::invariant(format!(
                    "Capture choice left pending for the {side} side"
                )));
            }
            Phase::RoundSweep => settle_round(&current)?,
            Phase::RoundScoring => return finish_round(current, plays),
        };
    }
    Err(DomainError::invariant(format!(
        "Round did not finish within {MAX_STEPS_PER_ROUND} steps"
    )))
}

fn finish_round(state: GameState, plays: usize) -> Result<RoundReport, DomainError> {
    check_conservation(&state)?;
    let (outcome, lower, upper) = find_winner(&state);
    info!(
        round_no = state.round_no,
        outcome = ?outcome,
        lower_total = lower.total(),
        upper_total = upper.total(),
        scopas_lower = state.scopa_count(Side::Lower),
        scopas_upper = state.scopa_count(Side::Upper),
        plays,
        "Round finished"
    );
    Ok(RoundReport {
        state,
        outcome,
        lower,
        upper,
        plays,
    })
}
