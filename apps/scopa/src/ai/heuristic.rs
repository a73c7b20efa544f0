//! Heuristic: the deterministic computer opponent.
//!
//! Every candidate move (each hand card paired with each of its capture
//! options, or a plain placement when it captures nothing) gets six
//! priorities computed from what it would bank and what both sides already
//! hold. A `WeightCombiner` folds them into one weight and the first
//! candidate with the strictly greatest weight is played.
//!
//! Priorities:
//! - cards: how many cards the move banks.
//! - scopa: 10 when the capture clears a non-empty table.
//! - gold_seven: 10 when the 7 of Coins is banked.
//! - sevens / golds: chase the sette and ori majorities while they are still
//!   open, defend them once the opponent is on the threshold.
//! - napola: race for the Ace-2-3 of Coins; once the opponent owns all three,
//!   deny them the Coins that would extend their run.
//!
//! Determinism: no randomness is used. Candidates are visited in hand order,
//! then capture-option order.

use tracing::debug;

use crate::ai::config::{AiConfig, PriorityWeights};
use crate::ai::{AiError, AiPlayer};
use crate::domain::cards_types::{count_coins, count_napola_base, count_value, SETTEBELLO};
use crate::domain::player_view::VisibleState;
use crate::domain::rules::{ORI_MAJORITY, SETTE_MAJORITY};
use crate::domain::{Card, Move};

/// Sub-priorities of one candidate move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Priorities {
    pub cards: u32,
    pub scopa: u32,
    pub gold_seven: u32,
    pub sevens: u32,
    pub golds: u32,
    pub napola: u32,
}

/// Folds priorities into one comparable weight.
pub trait WeightCombiner: Send + Sync {
    fn combine(&self, p: &Priorities) -> i64;
}

/// Plain sum of all six priorities.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumCombiner;

impl WeightCombiner for SumCombiner {
    fn combine(&self, p: &Priorities) -> i64 {
        i64::from(p.cards)
            + i64::from(p.scopa)
            + i64::from(p.gold_seven)
            + i64::from(p.sevens)
            + i64::from(p.golds)
            + i64::from(p.napola)
    }
}

/// Sum with a coefficient per priority.
#[derive(Debug, Clone, Copy)]
pub struct WeightedCombiner {
    pub weights: PriorityWeights,
}

impl WeightCombiner for WeightedCombiner {
    fn combine(&self, p: &Priorities) -> i64 {
        let w = &self.weights;
        w.cards * i64::from(p.cards)
            + w.scopa * i64::from(p.scopa)
            + w.gold_seven * i64::from(p.gold_seven)
            + w.sevens * i64::from(p.sevens)
            + w.golds * i64::from(p.golds)
            + w.napola * i64::from(p.napola)
    }
}

pub struct Heuristic {
    combiner: Box<dyn WeightCombiner>,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    /// The seed is accepted for registry uniformity; play is fully deterministic.
    pub fn new(_seed: Option<u64>) -> Self {
        Self::with_combiner(Box::new(SumCombiner))
    }

    pub fn with_combiner(combiner: Box<dyn WeightCombiner>) -> Self {
        Self { combiner }
    }

    /// Weighted combiner when the config carries `weights`, plain sum otherwise.
    pub fn from_config(config: &AiConfig) -> Self {
        match config.weights() {
            Some(weights) => Self::with_combiner(Box::new(WeightedCombiner { weights })),
            None => Self::new(config.seed()),
        }
    }

    /// Weight of a single candidate under this heuristic's combiner.
    pub fn weigh(&self, state: &VisibleState, mv: &Move) -> i64 {
        self.combiner.combine(&priorities(state, mv))
    }
}

impl AiPlayer for Heuristic {
    fn choose_move(&self, state: &VisibleState) -> Result<Move, AiError> {
        let mut best: Option<(i64, Move)> = None;
        for mv in state.legal_moves() {
            let weight = self.weigh(state, &mv);
            debug!(side = %state.side, card = %mv.card, weight, "Weighed candidate");
            if best.as_ref().map_or(true, |(w, _)| weight > *w) {
                best = Some((weight, mv));
            }
        }
        best.map(|(_, mv)| mv).ok_or_else(|| {
            AiError::Internal(format!(
                "no candidate move for a hand of {} cards",
                state.hand.len()
            ))
        })
    }
}

/// Cards a move would bank: the capture plus the played card. A placement
/// banks nothing, so it always weighs zero.
pub fn winnable(mv: &Move) -> Vec<Card> {
    match &mv.capture {
        Some(capture) => {
            let mut cards = capture.cards().to_vec();
            cards.push(mv.card);
            cards
        }
        None => Vec::new(),
    }
}

/// Compute the six priorities of `mv` from `state`'s point of view.
pub fn priorities(state: &VisibleState, mv: &Move) -> Priorities {
    let win = winnable(mv);
    let clears = mv
        .capture
        .as_ref()
        .is_some_and(|c| c.clears(&state.centre));

    Priorities {
        cards: win.len() as u32,
        scopa: if clears { 10 } else { 0 },
        gold_seven: if win.contains(&SETTEBELLO) { 10 } else { 0 },
        sevens: majority_priority(
            count_value(&win, 7),
            count_value(&state.won, 7),
            count_value(&state.lost, 7),
            SETTE_MAJORITY,
        ),
        golds: majority_priority(
            count_coins(&win),
            count_coins(&state.won),
            count_coins(&state.lost),
            ORI_MAJORITY,
        ),
        napola: napola_priority(&win, &state.won, &state.lost),
    }
}

/// Shared shape of the sevens and golds priorities.
///
/// Opponent past the threshold: the point is gone. Opponent on it: deny.
/// Otherwise chase hard until we hold the threshold ourselves.
fn majority_priority(winnable: usize, won: usize, lost: usize, threshold: usize) -> u32 {
    let w = winnable as u32;
    if lost > threshold {
        0
    } else if lost == threshold {
        w * 2
    } else if won >= threshold {
        w
    } else {
        w * 3
    }
}

fn napola_priority(win: &[Card], won: &[Card], lost: &[Card]) -> u32 {
    let win_n = count_napola_base(win) as u32;
    let won_n = count_napola_base(won) as u32;
    let lost_n = count_napola_base(lost);

    if lost_n == 3 {
        return win
            .iter()
            .filter(|c| c.is_coins())
            .map(|c| c.value as u32)
            .min()
            .unwrap_or(0);
    }
    if win_n == 0 {
        return 0;
    }

    let mut priority = if lost_n >= 1 {
        (win_n + lost_n as u32) * 2
    } else {
        win_n
    };
    if won_n >= 1 {
        priority *= won_n + 1;
    }
    if won_n == 3 && win.iter().any(Card::is_coins) {
        priority *= 3;
    }
    priority
}
