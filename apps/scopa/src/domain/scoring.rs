//! Round scoring: per-category points and the round winner.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{
    count_coins, count_napola_base, count_value, MAX_VALUE, SETTEBELLO,
};
use crate::domain::rules::{CARTE_MAJORITY, ORI_MAJORITY, SETTE_MAJORITY};
use crate::domain::state::{GameState, Side};
use crate::domain::{Card, Suit};

/// Points one side earned in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub carte: u32,
    pub ori: u32,
    pub settebello: u32,
    pub sette: u32,
    pub napola: u32,
    pub scopa: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.carte + self.ori + self.settebello + self.sette + self.napola + self.scopa
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Lower,
    Upper,
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Lower => Some(Side::Lower),
            Outcome::Upper => Some(Side::Upper),
            Outcome::Draw => None,
        }
    }
}

/// Score both won piles as they stand. Pure; also usable mid-round as a preview.
///
/// Returns `(lower, upper)`.
pub fn compute_score(state: &GameState) -> (ScoreBreakdown, ScoreBreakdown) {
    score_piles(
        state.won_pile(Side::Lower),
        state.won_pile(Side::Upper),
        state.scopas,
    )
}

/// Score two won piles plus scopa counters.
pub fn score_piles(
    lower: &[Card],
    upper: &[Card],
    scopas: [u32; 2],
) -> (ScoreBreakdown, ScoreBreakdown) {
    let mut lo = ScoreBreakdown::default();
    let mut up = ScoreBreakdown::default();

    award(
        majority(lower.len(), upper.len(), CARTE_MAJORITY),
        &mut lo.carte,
        &mut up.carte,
    );
    award(
        majority(count_coins(lower), count_coins(upper), ORI_MAJORITY),
        &mut lo.ori,
        &mut up.ori,
    );

    if lower.contains(&SETTEBELLO) {
        lo.settebello = 1;
    } else if upper.contains(&SETTEBELLO) {
        up.settebello = 1;
    }

    let sevens = (count_value(lower, 7), count_value(upper, 7));
    let sette = if sevens.0 == sevens.1 {
        majority(count_value(lower, 6), count_value(upper, 6), usize::MAX)
    } else {
        majority(sevens.0, sevens.1, SETTE_MAJORITY)
    };
    award(sette, &mut lo.sette, &mut up.sette);

    lo.napola = napola_points(lower);
    up.napola = napola_points(upper);
    lo.scopa = scopas[0];
    up.scopa = scopas[1];

    (lo, up)
}

/// Points for a run of Coins starting at the Ace.
///
/// Requires the Ace, 2 and 3 of Coins; the run then extends through 4, 5, ...
/// while each next Coins card is present. Worth the highest value reached
/// minus one, so Ace to 3 scores 2 and the full suit scores 9.
pub fn napola_points(pile: &[Card]) -> u32 {
    if count_napola_base(pile) < 3 {
        return 0;
    }
    let mut highest = 3u8;
    for value in 4..=MAX_VALUE {
        if !pile.contains(&Card::new(Suit::Coins, value)) {
            break;
        }
        highest = value;
    }
    (highest - 1) as u32
}

/// Compare totals of a finished (or previewed) round.
pub fn find_winner(state: &GameState) -> (Outcome, ScoreBreakdown, ScoreBreakdown) {
    let (lower, upper) = compute_score(state);
    let outcome = match lower.total().cmp(&upper.total()) {
        Ordering::Greater => Outcome::Lower,
        Ordering::Less => Outcome::Upper,
        Ordering::Equal => Outcome::Draw,
    };
    (outcome, lower, upper)
}

/// Category winner: anyone past `threshold` takes it outright, otherwise the
/// larger count wins and equal counts draw. Thresholds only matter when every
/// card was banked; the comparison covers rounds with discarded leftovers.
fn majority(lower: usize, upper: usize, threshold: usize) -> Outcome {
    if lower > threshold {
        return Outcome::Lower;
    }
    if upper > threshold {
        return Outcome::Upper;
    }
    match lower.cmp(&upper) {
        Ordering::Greater => Outcome::Lower,
        Ordering::Less => Outcome::Upper,
        Ordering::Equal => Outcome::Draw,
    }
}

fn award(outcome: Outcome, lower: &mut u32, upper: &mut u32) {
    match outcome {
        Outcome::Lower => *lower += 1,
        Outcome::Upper => *upper += 1,
        Outcome::Draw => {}
    }
}
