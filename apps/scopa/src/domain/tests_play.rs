use crate::domain::capture::Capture;
use crate::domain::play::{apply_move, play_card, resolve_capture_choice, Move, PlayOutcome};
use crate::domain::state::{check_conservation, Phase, Side};
use crate::domain::test_state_helpers::{bank_deck, card, cards, table};
use crate::errors::domain::DomainError;

#[test]
fn two_card_capture_clearing_table_is_a_scopa() {
    let state = table(&["6S", "9B"], &["1C"], &["2D", "4D"], Side::Lower);
    let PlayOutcome::Applied(next) = play_card(&state, card("6S")).unwrap() else {
        panic!("single option should auto-apply");
    };

    assert!(next.centre.is_empty());
    assert_eq!(next.scopa_count(Side::Lower), 1);
    assert_eq!(next.last_capturer, Some(Side::Lower));
    let mut won = next.won_pile(Side::Lower).to_vec();
    won.sort();
    assert_eq!(won, {
        let mut w = cards(&["2D", "4D", "6S"]);
        w.sort();
        w
    });
    assert_eq!(next.turn, Side::Upper);
    assert_eq!(next.phase, Phase::AwaitingPlay { side: Side::Upper });
    assert!(check_conservation(&next).is_ok());
}

#[test]
fn single_card_match_is_forced() {
    let state = table(&["7S"], &["1C"], &["3S", "4D", "7B"], Side::Lower);
    let next = play_card(&state, card("7S")).unwrap().into_state();

    assert_eq!(next.centre, cards(&["3S", "4D"]));
    assert_eq!(next.scopa_count(Side::Lower), 0);
    assert!(next.won_pile(Side::Lower).contains(&card("7B")));
}

#[test]
fn no_option_places_card_on_table() {
    let state = table(&["9C", "1S"], &["2C"], &["5D"], Side::Lower);
    let next = play_card(&state, card("9C")).unwrap().into_state();

    assert_eq!(next.centre, cards(&["5D", "9C"]));
    assert_eq!(next.hand(Side::Lower), cards(&["1S"]).as_slice());
    assert!(next.won_pile(Side::Lower).is_empty());
    assert_eq!(next.last_capturer, None);
    assert_eq!(next.phase, Phase::AwaitingPlay { side: Side::Upper });
}

#[test]
fn several_options_wait_for_a_choice() {
    let state = table(&["5S", "1B"], &["2C"], &["5D", "5C", "4S"], Side::Lower);
    let outcome = play_card(&state, card("5S")).unwrap();
    let PlayOutcome::AwaitingChoice { state: pending, options } = outcome else {
        panic!("expected a capture choice");
    };

    assert_eq!(
        options,
        vec![Capture::new(cards(&["5D"])), Capture::new(cards(&["5C"]))]
    );
    assert_eq!(
        pending.phase,
        Phase::AwaitingCaptureChoice {
            side: Side::Lower,
            played: card("5S"),
            options: options.clone(),
        }
    );
    // The played card stays in hand until the choice resolves.
    assert!(pending.hand(Side::Lower).contains(&card("5S")));
    assert!(check_conservation(&pending).is_ok());

    let resolved = resolve_capture_choice(&pending, 1).unwrap();
    assert_eq!(resolved.centre, cards(&["5D", "4S"]));
    assert!(resolved.won_pile(Side::Lower).contains(&card("5C")));
    assert_eq!(resolved.phase, Phase::AwaitingPlay { side: Side::Upper });
}

#[test]
fn choice_index_out_of_range_is_invalid_option() {
    let state = table(&["5S"], &["2C"], &["5D", "5C"], Side::Lower);
    let pending = play_card(&state, card("5S")).unwrap().into_state();
    let before = pending.clone();

    let err = resolve_capture_choice(&pending, 2).unwrap_err();
    assert!(matches!(err, DomainError::InvalidOption(_)));
    assert_eq!(pending, before);
}

#[test]
fn resolving_without_pending_choice_is_invalid_state() {
    let state = table(&["5S"], &["2C"], &["5D"], Side::Lower);
    let err = resolve_capture_choice(&state, 0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn card_not_in_hand_is_invalid_move() {
    let state = table(&["5S"], &["2C"], &["5D"], Side::Lower);
    let err = play_card(&state, card("2C")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidMove(_)));
}

#[test]
fn play_during_choice_is_invalid_state() {
    let state = table(&["5S", "1D"], &["2C"], &["5D", "5C"], Side::Lower);
    let pending = play_card(&state, card("5S")).unwrap().into_state();
    let err = play_card(&pending, card("1D")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn empty_hands_with_deck_left_go_back_to_dealing() {
    let state = table(&[], &["9C"], &["1D"], Side::Upper);
    let next = play_card(&state, card("9C")).unwrap().into_state();
    assert_eq!(next.phase, Phase::Dealing);
    assert_eq!(next.turn, Side::Lower);
}

#[test]
fn empty_hands_and_deck_reach_the_sweep() {
    let mut state = table(&[], &["9C"], &["1D"], Side::Upper);
    bank_deck(&mut state, Side::Lower);
    let next = play_card(&state, card("9C")).unwrap().into_state();
    assert_eq!(next.phase, Phase::RoundSweep);
}

#[test]
fn scopa_grants_no_extra_turn() {
    let state = table(&["3D", "1B"], &["2C"], &["3C"], Side::Lower);
    let next = play_card(&state, card("3D")).unwrap().into_state();
    assert_eq!(next.scopa_count(Side::Lower), 1);
    assert_eq!(next.phase, Phase::AwaitingPlay { side: Side::Upper });
}

#[test]
fn capture_from_empty_table_is_impossible() {
    let state = table(&["3D", "1B"], &["2C"], &[], Side::Lower);
    let next = play_card(&state, card("3D")).unwrap().into_state();
    assert_eq!(next.scopa_count(Side::Lower), 0);
    assert_eq!(next.centre, cards(&["3D"]));
}

#[test]
fn apply_move_checks_the_requested_capture() {
    let state = table(&["5S", "1B"], &["2C"], &["5D", "5C"], Side::Lower);

    let ok = apply_move(
        &state,
        &Move::capture(card("5S"), Capture::new(cards(&["5C"]))),
    )
    .unwrap();
    assert_eq!(ok.centre, cards(&["5D"]));

    let err = apply_move(&state, &Move::place(card("5S"))).unwrap_err();
    assert!(matches!(err, DomainError::InvalidMove(_)));

    let err = apply_move(
        &state,
        &Move::capture(card("1B"), Capture::new(cards(&["5D"]))),
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::InvalidMove(_)));
}
