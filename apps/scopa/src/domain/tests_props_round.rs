/// Property-based tests over whole rounds played with random legal choices
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::deal_next;
use crate::domain::play::{play_card, resolve_capture_choice};
use crate::domain::round::new_game;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::scoring::compute_score;
use crate::domain::settlement::settle_round;
use crate::domain::state::{check_conservation, GameState, Phase, Side};
use crate::domain::{test_gens, test_prelude};

/// One step of a random round; `None` once scoring is reached.
fn step(state: &GameState, rng: &mut ChaCha8Rng) -> Option<GameState> {
    let next = match &state.phase {
        Phase::Dealing => deal_next(state),
        Phase::AwaitingPlay { side } => {
            let hand = state.hand(*side);
            let card = hand[rng.random_range(0..hand.len())];
            play_card(state, card).map(|o| o.into_state())
        }
        Phase::AwaitingCaptureChoice { options, .. } => {
            resolve_capture_choice(state, rng.random_range(0..options.len()))
        }
        Phase::RoundSweep => settle_round(state),
        Phase::RoundScoring => return None,
    };
    Some(next.expect("legal step must succeed"))
}

/// Check per-play rules on a completed play by `side`.
fn check_play(before: &GameState, after: &GameState, side: Side) -> Result<(), TestCaseError> {
    prop_assert_eq!(after.turn, side.other(), "Turn flips exactly once per play");

    let captured = after.won_pile(side).len() > before.won_pile(side).len();
    let scopa = after.scopa_count(side) > before.scopa_count(side);
    let cleared = captured && !before.centre.is_empty() && after.centre.is_empty();
    prop_assert_eq!(scopa, cleared, "Scopa iff a capture cleared a non-empty table");
    prop_assert_eq!(
        after.scopa_count(side.other()),
        before.scopa_count(side.other())
    );
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: conservation, hand bounds and deck monotonicity hold at every step.
    #[test]
    fn prop_round_conserves_cards(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = new_game(Some(seed));
        while let Some(next) = step(&state, &mut rng) {
            prop_assert!(check_conservation(&next).is_ok());
            prop_assert!(next.hands.iter().all(|h| h.len() <= HAND_SIZE));
            prop_assert!(next.deck.len() <= state.deck.len());
            state = next;
        }

        prop_assert_eq!(state.phase, Phase::RoundScoring);
        prop_assert!(state.deck.is_empty() && state.centre.is_empty());
        let banked = state.won.iter().map(Vec::len).sum::<usize>() + state.discarded.len();
        prop_assert_eq!(banked, DECK_SIZE);
    }

    /// Property: turns alternate and scopas are scored exactly when the table is cleared.
    #[test]
    fn prop_turns_alternate_and_scopas_are_exact(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = new_game(Some(seed));
        while let Some(next) = step(&state, &mut rng) {
            let actor = state.phase.actor();
            let completed = !matches!(next.phase, Phase::AwaitingCaptureChoice { .. });
            if let (Some(side), true) = (actor, completed) {
                check_play(&state, &next, side)?;
            }
            state = next;
        }
    }

    /// Property: final scores stay inside their category bounds.
    #[test]
    fn prop_scores_are_bounded(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = new_game(Some(seed));
        while let Some(next) = step(&state, &mut rng) {
            state = next;
        }

        let (lo, up) = compute_score(&state);
        for (name, a, b) in [
            ("carte", lo.carte, up.carte),
            ("ori", lo.ori, up.ori),
            ("settebello", lo.settebello, up.settebello),
            ("sette", lo.sette, up.sette),
        ] {
            prop_assert!(a + b <= 1, "{} awarded twice", name);
        }
        prop_assert!(lo.napola <= 9 && up.napola <= 9);
        prop_assert!(lo.napola == 0 || up.napola == 0, "Only one side can hold the Ace of Coins");
        if state.discarded.is_empty() {
            prop_assert_eq!(lo.settebello + up.settebello, 1);
        }
        prop_assert_eq!(lo.scopa, state.scopas[0]);
        prop_assert_eq!(up.scopa, state.scopas[1]);
    }
}
