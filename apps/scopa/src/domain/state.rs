use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::capture::Capture;
use crate::domain::rules::DECK_SIZE;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// The two seats at the table: `Lower` is the human, `Upper` the computer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Lower,
    Upper,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Lower, Side::Upper];

    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Lower => 0,
            Side::Upper => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

/// Round progression phases.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Cards are being dealt one at a time.
    Dealing,
    /// `side` must play one card from its hand.
    AwaitingPlay { side: Side },
    /// `side` played `played` (still held in its hand) and must pick one of
    /// several captures.
    AwaitingCaptureChoice {
        side: Side,
        played: Card,
        options: Vec<Capture>,
    },
    /// Deck and hands are exhausted; leftover centre cards await settlement.
    RoundSweep,
    /// Terminal: piles are final and can be scored.
    RoundScoring,
}

impl Phase {
    /// Side expected to act, if any.
    pub fn actor(&self) -> Option<Side> {
        match self {
            Phase::AwaitingPlay { side } | Phase::AwaitingCaptureChoice { side, .. } => Some(*side),
            _ => None,
        }
    }
}

/// Entire round container, sufficient for every pure domain operation.
///
/// Commands never mutate a `GameState` in place: each one clones, applies its
/// change and hands back the successor, so a caller can keep old states for
/// comparison or undo.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// Current phase of the round.
    pub phase: Phase,
    /// 1-based round counter; `restart` increments it.
    pub round_no: u32,
    /// Seed the whole game derives its per-round shuffles from.
    pub game_seed: u64,
    /// Undealt cards; drawn from the end.
    pub deck: Vec<Card>,
    /// Hands indexed by `Side::index`.
    pub hands: [Vec<Card>; 2],
    /// Face-up cards on the table, in the order they arrived.
    pub centre: Vec<Card>,
    /// Captured cards indexed by `Side::index`.
    pub won: [Vec<Card>; 2],
    /// Centre cards left at the sweep of a round without any capture.
    pub discarded: Vec<Card>,
    /// Table-clearing captures per side.
    pub scopas: [u32; 2],
    /// Owner of the next play.
    pub turn: Side,
    /// Side that made the most recent capture this round.
    pub last_capturer: Option<Side>,
    /// True until the first deal of the round has laid out the centre cards.
    pub initial_deal_pending: bool,
}

impl GameState {
    /// Fresh round: full shuffled `deck`, empty piles, lower side to play first.
    pub fn with_deck(deck: Vec<Card>, game_seed: u64, round_no: u32) -> Self {
        Self {
            phase: Phase::Dealing,
            round_no,
            game_seed,
            deck,
            hands: [Vec::new(), Vec::new()],
            centre: Vec::new(),
            won: [Vec::new(), Vec::new()],
            discarded: Vec::new(),
            scopas: [0, 0],
            turn: Side::Lower,
            last_capturer: None,
            initial_deal_pending: true,
        }
    }

    pub fn hand(&self, side: Side) -> &[Card] {
        &self.hands[side.index()]
    }

    pub fn won_pile(&self, side: Side) -> &[Card] {
        &self.won[side.index()]
    }

    pub fn scopa_count(&self, side: Side) -> u32 {
        self.scopas[side.index()]
    }

    pub fn hands_empty(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }

    /// Every card location in one iterator.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.hands.iter().flatten())
            .chain(self.centre.iter())
            .chain(self.won.iter().flatten())
            .chain(self.discarded.iter())
    }
}

/// Check that exactly the 40 distinct cards are present across all piles.
pub fn check_conservation(state: &GameState) -> Result<(), DomainError> {
    let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
    let mut total = 0usize;
    for card in state.all_cards() {
        total += 1;
        if !seen.insert(*card) {
            return Err(DomainError::invariant(format!(
                "Invariant violated: {card} appears twice"
            )));
        }
    }
    if total != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "Invariant violated: {total} cards in play, expected {DECK_SIZE}"
        )));
    }
    Ok(())
}

/// The side whose play is awaited, or `InvalidState` naming the operation.
pub fn require_awaiting_play(state: &GameState, ctx: &'static str) -> Result<Side, DomainError> {
    match state.phase {
        Phase::AwaitingPlay { side } => Ok(side),
        ref other => Err(DomainError::invalid_state(format!(
            "{ctx} requires a pending play, phase is {other:?}"
        ))),
    }
}
