//! Card play, capture application and turn hand-over.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::capture::{compute_options, Capture};
use crate::domain::state::{require_awaiting_play, GameState, Phase, Side};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// A fully specified play: the card and, when it captures, which cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub capture: Option<Capture>,
}

impl Move {
    pub fn place(card: Card) -> Self {
        Self {
            card,
            capture: None,
        }
    }

    pub fn capture(card: Card, capture: Capture) -> Self {
        Self {
            card,
            capture: Some(capture),
        }
    }
}

/// Result of `play_card`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The play completed: placed on the table or captured automatically.
    Applied(GameState),
    /// More than one capture is possible; `state` is in
    /// `AwaitingCaptureChoice` and `options` repeats its choices.
    AwaitingChoice {
        state: GameState,
        options: Vec<Capture>,
    },
}

impl PlayOutcome {
    pub fn state(&self) -> &GameState {
        match self {
            PlayOutcome::Applied(state) | PlayOutcome::AwaitingChoice { state, .. } => state,
        }
    }

    pub fn into_state(self) -> GameState {
        match self {
            PlayOutcome::Applied(state) | PlayOutcome::AwaitingChoice { state, .. } => state,
        }
    }
}

/// Capture options for `card` against the state's centre.
pub fn options_for(state: &GameState, card: Card) -> Vec<Capture> {
    compute_options(card, &state.centre)
}

/// Play `card` from the active side's hand.
pub fn play_card(state: &GameState, card: Card) -> Result<PlayOutcome, DomainError> {
    let side = require_awaiting_play(state, "play_card")?;
    if !state.hand(side).contains(&card) {
        return Err(DomainError::invalid_move(format!(
            "{card} is not in the {side} hand"
        )));
    }

    let mut options = options_for(state, card);
    match options.len() {
        0 => Ok(PlayOutcome::Applied(place_card(state, side, card)?)),
        1 => {
            let capture = options.remove(0);
            Ok(PlayOutcome::Applied(apply_capture(
                state, side, card, &capture,
            )?))
        }
        n => {
            debug!(side = %side, card = %card, options = n, "Capture choice required");
            let mut next = state.clone();
            next.phase = Phase::AwaitingCaptureChoice {
                side,
                played: card,
                options: options.clone(),
            };
            Ok(PlayOutcome::AwaitingChoice {
                state: next,
                options,
            })
        }
    }
}

/// Resolve a pending capture choice by index into its option list.
pub fn resolve_capture_choice(state: &GameState, index: usize) -> Result<GameState, DomainError> {
    let Phase::AwaitingCaptureChoice {
        side,
        played,
        options,
    } = &state.phase
    else {
        return Err(DomainError::invalid_state(format!(
            "resolve_capture_choice requires a pending capture choice, phase is {:?}",
            state.phase
        )));
    };
    let capture = options.get(index).ok_or_else(|| {
        DomainError::invalid_option(format!(
            "option {index} out of range, {} available",
            options.len()
        ))
    })?;
    apply_capture(state, *side, *played, capture)
}

/// Apply a complete move in one step: play, then pick the matching capture.
///
/// A move whose capture is not among the card's options is rejected with
/// `InvalidMove`. The input state is never modified.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, DomainError> {
    match play_card(state, mv.card)? {
        PlayOutcome::Applied(next) => {
            // At most one option exists here, so it is what the play took.
            let taken = options_for(state, mv.card).into_iter().next();
            if taken != mv.capture {
                return Err(DomainError::invalid_move(format!(
                    "{} does not allow the requested capture",
                    mv.card
                )));
            }
            Ok(next)
        }
        PlayOutcome::AwaitingChoice { state: next, options } => {
            let index = mv
                .capture
                .as_ref()
                .and_then(|wanted| options.iter().position(|o| o == wanted))
                .ok_or_else(|| {
                    DomainError::invalid_move(format!(
                        "{} requires choosing one of {} captures",
                        mv.card,
                        options.len()
                    ))
                })?;
            resolve_capture_choice(&next, index)
        }
    }
}

fn place_card(state: &GameState, side: Side, card: Card) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    remove_from_hand(&mut next, side, card)?;
    next.centre.push(card);
    debug!(side = %side, card = %card, "Placed card");
    Ok(finish_play(next, side))
}

fn apply_capture(
    state: &GameState,
    side: Side,
    card: Card,
    capture: &Capture,
) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    let centre_before = next.centre.len();
    for taken in capture.cards() {
        let pos = next
            .centre
            .iter()
            .position(|c| c == taken)
            .ok_or_else(|| {
                DomainError::invariant(format!("Captured card {taken} is not on the table"))
            })?;
        next.centre.remove(pos);
    }
    remove_from_hand(&mut next, side, card)?;

    let won = &mut next.won[side.index()];
    won.extend_from_slice(capture.cards());
    won.push(card);
    next.last_capturer = Some(side);
    debug!(side = %side, card = %card, captured = capture.len(), "Captured");

    if centre_before > 0 && capture.len() == centre_before {
        next.scopas[side.index()] += 1;
        debug!(side = %side, scopas = next.scopas[side.index()], "Scopa");
    }
    Ok(finish_play(next, side))
}

fn remove_from_hand(state: &mut GameState, side: Side, card: Card) -> Result<(), DomainError> {
    let hand = &mut state.hands[side.index()];
    let pos = hand
        .iter()
        .position(|c| *c == card)
        .ok_or_else(|| DomainError::invariant(format!("{card} vanished from the {side} hand")))?;
    hand.remove(pos);
    Ok(())
}

/// Flip the turn once and pick the phase that follows a completed play.
fn finish_play(mut next: GameState, side: Side) -> GameState {
    next.turn = side.other();
    next.phase = if next.hands_empty() {
        if next.deck.is_empty() {
            Phase::RoundSweep
        } else {
            Phase::Dealing
        }
    } else {
        Phase::AwaitingPlay { side: next.turn }
    };
    next
}
