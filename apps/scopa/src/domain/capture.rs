//! Capture options: which sets of centre cards a played card may take.
//!
//! A capture is any set of centre cards whose values add up to the played
//! card's value. When a single centre card matches the value outright it must
//! be taken in preference to any combination, so multi-card sets are dropped
//! whenever a single-card one exists.

use serde::{Deserialize, Serialize};

use crate::domain::Card;

/// A non-empty set of centre cards taken by one play.
///
/// Cards are kept sorted so two captures holding the same cards compare
/// equal regardless of the order they were found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capture {
    cards: Vec<Card>,
}

impl Capture {
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort();
        cards.dedup();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn sum(&self) -> u32 {
        self.cards.iter().map(|c| c.value as u32).sum()
    }

    /// Whether taking this capture from `centre` leaves the table empty.
    pub fn clears(&self, centre: &[Card]) -> bool {
        !centre.is_empty() && self.cards.len() == centre.len()
    }
}

/// Compute every legal capture for `card` against `centre`.
///
/// Results come in enumeration order (lowest centre index first), which
/// callers may rely on for deterministic tie-breaking. Branches stop as soon
/// as the running sum reaches the target, so the search depth never exceeds
/// the card's value however large the centre grows.
pub fn compute_options(card: Card, centre: &[Card]) -> Vec<Capture> {
    let target = card.value as u32;
    let mut found: Vec<Vec<Card>> = Vec::new();
    let mut partial: Vec<Card> = Vec::with_capacity(target as usize);
    collect_subsets(centre, 0, target, 0, &mut partial, &mut found);

    let options: Vec<Capture> = found.into_iter().map(Capture::new).collect();
    if options.iter().any(|o| o.len() == 1) {
        options.into_iter().filter(|o| o.len() == 1).collect()
    } else {
        options
    }
}

fn collect_subsets(
    centre: &[Card],
    start: usize,
    target: u32,
    partial_sum: u32,
    partial: &mut Vec<Card>,
    found: &mut Vec<Vec<Card>>,
) {
    if partial_sum == target && !partial.is_empty() {
        found.push(partial.clone());
        return;
    }
    if partial_sum >= target {
        return;
    }
    for (i, &card) in centre.iter().enumerate().skip(start) {
        partial.push(card);
        collect_subsets(
            centre,
            i + 1,
            target,
            partial_sum + card.value as u32,
            partial,
            found,
        );
        partial.pop();
    }
}
