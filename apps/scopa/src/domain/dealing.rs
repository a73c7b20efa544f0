//! One-card-at-a-time dealing.

use tracing::debug;

use crate::domain::deck::draw;
use crate::domain::rules::{HAND_SIZE, INITIAL_CENTRE};
use crate::domain::state::{GameState, Phase, Side};
use crate::errors::domain::DomainError;

/// Where the next dealt card goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealTarget {
    Hand(Side),
    Centre,
}

/// Next placement of the current deal, or `None` once the deal is complete.
///
/// Hands alternate lower, upper, lower, ... until both hold three. Only the
/// round's first deal then lays out the centre cards.
pub fn next_deal_target(state: &GameState) -> Option<DealTarget> {
    let lower = state.hand(Side::Lower).len();
    let upper = state.hand(Side::Upper).len();
    if lower < HAND_SIZE || upper < HAND_SIZE {
        let side = if lower <= upper {
            Side::Lower
        } else {
            Side::Upper
        };
        return Some(DealTarget::Hand(side));
    }
    if state.initial_deal_pending && state.centre.len() < INITIAL_CENTRE {
        return Some(DealTarget::Centre);
    }
    None
}

/// Deal exactly one card.
///
/// When that card completes the deal the phase moves to
/// `AwaitingPlay { side: turn }` and the initial-deal flag is cleared.
pub fn deal_next(state: &GameState) -> Result<GameState, DomainError> {
    if state.phase != Phase::Dealing {
        return Err(DomainError::invalid_state(format!(
            "deal_next requires the Dealing phase, phase is {:?}",
            state.phase
        )));
    }
    if state.deck.is_empty() {
        return Err(DomainError::DeckExhausted);
    }
    let target = next_deal_target(state).ok_or_else(|| {
        DomainError::invariant("Dealing phase with nothing left to deal")
    })?;

    let mut next = state.clone();
    let card = draw(&mut next.deck).ok_or(DomainError::DeckExhausted)?;
    match target {
        DealTarget::Hand(side) => next.hands[side.index()].push(card),
        DealTarget::Centre => next.centre.push(card),
    }
    debug!(card = %card, target = ?target, deck_remaining = next.deck.len(), "Dealt card");

    if next_deal_target(&next).is_none() {
        next.initial_deal_pending = false;
        next.phase = Phase::AwaitingPlay { side: next.turn };
    }
    Ok(next)
}

/// Run `deal_next` until the deal completes.
pub fn deal_all(state: &GameState) -> Result<GameState, DomainError> {
    let mut current = deal_next(state)?;
    while current.phase == Phase::Dealing {
        current = deal_next(&current)?;
    }
    Ok(current)
}
