use crate::domain::settlement::{is_round_over, settle_round};
use crate::domain::state::{check_conservation, Phase, Side};
use crate::domain::test_state_helpers::{bank_deck, cards, table};
use crate::errors::domain::DomainError;

fn sweep_state(centre: &[&str], last_capturer: Option<Side>) -> crate::domain::GameState {
    let mut state = table(&[], &[], centre, Side::Lower);
    bank_deck(&mut state, Side::Upper);
    state.phase = Phase::RoundSweep;
    state.last_capturer = last_capturer;
    state
}

#[test]
fn leftovers_go_to_last_capturer() {
    let state = sweep_state(&["3D", "8B"], Some(Side::Lower));
    let settled = settle_round(&state).unwrap();

    assert!(settled.centre.is_empty());
    assert_eq!(settled.won_pile(Side::Lower), cards(&["3D", "8B"]).as_slice());
    assert_eq!(settled.scopas, [0, 0]);
    assert_eq!(settled.phase, Phase::RoundScoring);
    assert!(check_conservation(&settled).is_ok());
}

#[test]
fn leftovers_without_any_capture_are_discarded() {
    let mut state = table(&[], &[], &["3D", "8B"], Side::Lower);
    // Nobody captured: every other card sits in the discard pile.
    state.discarded = std::mem::take(&mut state.deck);
    state.phase = Phase::RoundSweep;

    let settled = settle_round(&state).unwrap();
    assert!(settled.won_pile(Side::Lower).is_empty());
    assert!(settled.won_pile(Side::Upper).is_empty());
    assert!(settled.discarded.contains(&cards(&["3D"])[0]));
    assert!(check_conservation(&settled).is_ok());
}

#[test]
fn empty_centre_settles_cleanly() {
    let state = sweep_state(&[], Some(Side::Upper));
    let settled = settle_round(&state).unwrap();
    assert_eq!(settled.phase, Phase::RoundScoring);
    assert_eq!(settled.won_pile(Side::Upper).len(), 40);
}

#[test]
fn settle_requires_the_sweep() {
    let state = table(&["1D"], &["2D"], &[], Side::Lower);
    let err = settle_round(&state).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));

    let settled = settle_round(&sweep_state(&[], Some(Side::Upper))).unwrap();
    assert!(matches!(
        settle_round(&settled),
        Err(DomainError::InvalidState(_))
    ));
}

#[test]
fn round_over_only_after_play_ends() {
    assert!(!is_round_over(&table(&["1D"], &["2D"], &[], Side::Lower)));
    let sweep = sweep_state(&["4C"], Some(Side::Lower));
    assert!(is_round_over(&sweep));
    assert!(is_round_over(&settle_round(&sweep).unwrap()));
}
