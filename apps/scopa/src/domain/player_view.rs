//! Player view of game state: what one side may see at a decision point.
//!
//! `VisibleState` is the interface between the engine and AI players. It
//! carries the acting side's own hand, the table, both won piles (they are
//! face up in Scopa) and counts for everything hidden.
//!
//! # For AI Developers
//!
//! Use [`VisibleState::legal_moves`] rather than re-implementing the capture
//! rules: it lists every complete move, one per capture option, with a
//! placement (`capture: None`) for each card that takes nothing.

use crate::domain::capture::compute_options;
use crate::domain::play::Move;
use crate::domain::state::{GameState, Side};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleState {
    /// The side this view belongs to.
    pub side: Side,
    /// Your hand, in deal order.
    pub hand: Vec<Card>,
    /// Face-up cards on the table.
    pub centre: Vec<Card>,
    /// Cards you captured this round.
    pub won: Vec<Card>,
    /// Cards your opponent captured this round.
    pub lost: Vec<Card>,
    /// Scopas so far as `(yours, opponent's)`.
    pub scopas: (u32, u32),
    pub opponent_hand_size: usize,
    pub deck_remaining: usize,
    pub round_no: u32,
}

impl VisibleState {
    pub fn for_side(state: &GameState, side: Side) -> Self {
        Self {
            side,
            hand: state.hand(side).to_vec(),
            centre: state.centre.clone(),
            won: state.won_pile(side).to_vec(),
            lost: state.won_pile(side.other()).to_vec(),
            scopas: (state.scopa_count(side), state.scopa_count(side.other())),
            opponent_hand_size: state.hand(side.other()).len(),
            deck_remaining: state.deck.len(),
            round_no: state.round_no,
        }
    }

    /// Every complete move available: hand order, then capture-option order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for &card in &self.hand {
            let options = compute_options(card, &self.centre);
            if options.is_empty() {
                moves.push(Move::place(card));
            } else {
                moves.extend(options.into_iter().map(|o| Move::capture(card, o)));
            }
        }
        moves
    }
}
