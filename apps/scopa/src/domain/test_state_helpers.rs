//! Test-only game state builders for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::deck::full_deck;
use crate::domain::state::{GameState, Phase, Side};
use crate::domain::Card;

/// Parse card tokens; panics on a typo, which is what a test wants.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// A mid-round table: the given hands and centre, `side` to play, and every
/// unused card left in the deck so the 40-card count still closes.
pub fn table(lower: &[&str], upper: &[&str], centre: &[&str], side: Side) -> GameState {
    let hands = [cards(lower), cards(upper)];
    let centre = cards(centre);
    let deck: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !hands[0].contains(c) && !hands[1].contains(c) && !centre.contains(c))
        .collect();

    let mut state = GameState::with_deck(deck, 1, 1);
    state.hands = hands;
    state.centre = centre;
    state.turn = side;
    state.phase = Phase::AwaitingPlay { side };
    state.initial_deal_pending = false;
    state
}

/// Move every deck card into `side`'s won pile, leaving the deck empty.
pub fn bank_deck(state: &mut GameState, side: Side) {
    let deck = std::mem::take(&mut state.deck);
    state.won[side.index()].extend(deck);
}
