use crate::domain::deck::full_deck;
use crate::domain::scoring::{find_winner, napola_points, score_piles, Outcome, ScoreBreakdown};
use crate::domain::state::{GameState, Side};
use crate::domain::test_state_helpers::cards;
use crate::domain::{Card, Suit};

/// Split the deck: `lower` gets exactly these cards, upper gets the rest.
fn split(lower_tokens: &[&str]) -> (Vec<Card>, Vec<Card>) {
    let lower = cards(lower_tokens);
    let upper = full_deck()
        .into_iter()
        .filter(|c| !lower.contains(c))
        .collect();
    (lower, upper)
}

#[test]
fn carte_goes_to_the_larger_pile() {
    let deck = full_deck();
    let (lower, upper) = deck.split_at(21);
    let (lo, up) = score_piles(lower, upper, [0, 0]);
    assert_eq!((lo.carte, up.carte), (1, 0));
}

#[test]
fn carte_twenty_each_is_a_draw() {
    let deck = full_deck();
    let (lower, upper) = deck.split_at(20);
    let (lo, up) = score_piles(lower, upper, [0, 0]);
    assert_eq!((lo.carte, up.carte), (0, 0));
}

#[test]
fn ori_needs_six_coins() {
    let (lower, upper) = split(&["1D", "2D", "3D", "4D", "5D", "6D"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.ori, up.ori), (1, 0));

    let (lower, upper) = split(&["1D", "2D", "3D", "4D", "5D"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.ori, up.ori), (0, 0));
}

#[test]
fn settebello_follows_the_card() {
    let (lower, upper) = split(&["7D"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.settebello, up.settebello), (1, 0));
    let (lo, up) = score_piles(&upper, &lower, [0, 0]);
    assert_eq!((lo.settebello, up.settebello), (0, 1));
}

#[test]
fn sette_majority_and_six_tiebreak() {
    let (lower, upper) = split(&["7D", "7B", "7C"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.sette, up.sette), (1, 0));

    // Two sevens each: three sixes decide it.
    let (lower, upper) = split(&["7D", "7B", "6D", "6B", "6C"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.sette, up.sette), (1, 0));

    // Two sevens and two sixes each: nobody scores.
    let (lower, upper) = split(&["7D", "7B", "6D", "6B"]);
    let (lo, up) = score_piles(&lower, &upper, [0, 0]);
    assert_eq!((lo.sette, up.sette), (0, 0));
}

#[test]
fn napola_run_lengths() {
    assert_eq!(napola_points(&cards(&["1D", "2D", "3D"])), 2);
    assert_eq!(napola_points(&cards(&["1D", "2D", "3D", "4D", "5D"])), 4);
    assert_eq!(napola_points(&cards(&["1D", "2D", "3D", "4D", "5D", "7D"])), 4);
    assert_eq!(napola_points(&cards(&["1D", "2D", "4D", "5D"])), 0);
    assert_eq!(napola_points(&cards(&["1B", "2B", "3B"])), 0);

    let all_coins: Vec<Card> = (1..=10).map(|v| Card::new(Suit::Coins, v)).collect();
    assert_eq!(napola_points(&all_coins), 9);
}

#[test]
fn scopas_are_counted_as_is() {
    let (lo, up) = score_piles(&[], &[], [3, 1]);
    assert_eq!(lo.scopa, 3);
    assert_eq!(up.scopa, 1);
    assert_eq!(lo.total(), 3);
}

#[test]
fn empty_piles_score_nothing() {
    let (lo, up) = score_piles(&[], &[], [0, 0]);
    assert_eq!(lo, ScoreBreakdown::default());
    assert_eq!(up, ScoreBreakdown::default());
}

#[test]
fn winner_by_totals() {
    let mut state = GameState::with_deck(Vec::new(), 1, 1);
    let (lower, upper) = split(&[
        "1D", "2D", "3D", "4D", "5D", "6D", "7D", "7B", "7C", "1B", "2B", "3B", "4B", "5B",
        "6B", "8B", "9B", "10B", "1C", "2C", "3C",
    ]);
    state.won = [lower, upper];
    state.scopas = [0, 2];

    let (outcome, lo, up) = find_winner(&state);
    // carte, ori, settebello, sette and a napola of 6 against two scopas.
    assert_eq!(lo.total(), 1 + 1 + 1 + 1 + 6);
    assert_eq!(up.total(), 2);
    assert_eq!(outcome, Outcome::Lower);
    assert_eq!(outcome.winner(), Some(Side::Lower));
}

#[test]
fn equal_totals_draw() {
    let mut state = GameState::with_deck(full_deck(), 1, 1);
    state.scopas = [1, 1];
    let (outcome, _, _) = find_winner(&state);
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(outcome.winner(), None);
}
