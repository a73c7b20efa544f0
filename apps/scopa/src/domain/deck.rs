//! Deck construction and seeded shuffling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{MAX_VALUE, MIN_VALUE};
use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Suit};

/// Generate the 40-card deck in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            deck.push(Card { suit, value });
        }
    }
    deck
}

/// A full deck permuted by a uniform shuffle; identical seeds give identical decks.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Remove and return the next card. The deck is consumed from its end.
pub fn draw(deck: &mut Vec<Card>) -> Option<Card> {
    deck.pop()
}
