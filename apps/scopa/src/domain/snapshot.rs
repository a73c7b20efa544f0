//! Public snapshot API for rendering a round from one side's seat.
//!
//! A snapshot carries the viewer's own hand but only the size of the
//! opponent's. It is a plain serde value so a presentation layer can poll it
//! and diff it without touching `GameState`.

use serde::{Deserialize, Serialize};

use crate::domain::capture::Capture;
use crate::domain::scoring::{compute_score, ScoreBreakdown};
use crate::domain::state::{GameState, Phase, Side};
use crate::domain::Card;

/// Round-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundHeader {
    pub round_no: u32,
    pub viewer: Side,
    pub turn: Side,
    pub deck_remaining: usize,
    pub last_capturer: Option<Side>,
    pub scopas: [u32; 2],
    pub won_counts: [usize; 2],
}

/// Top-level snapshot combining header, table and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: RoundHeader,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    pub centre: Vec<Card>,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Dealing,
    AwaitingPlay {
        to_act: Side,
    },
    AwaitingCaptureChoice {
        to_act: Side,
        played: Card,
        /// Present only when the viewer is the side choosing.
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<Vec<Capture>>,
    },
    RoundSweep,
    RoundScoring(ScoringSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringSnapshot {
    pub lower: ScoreBreakdown,
    pub upper: ScoreBreakdown,
}

/// Produce a snapshot of `state` as seen by `viewer`.
pub fn snapshot(state: &GameState, viewer: Side) -> GameSnapshot {
    let round = RoundHeader {
        round_no: state.round_no,
        viewer,
        turn: state.turn,
        deck_remaining: state.deck.len(),
        last_capturer: state.last_capturer,
        scopas: state.scopas,
        won_counts: [
            state.won_pile(Side::Lower).len(),
            state.won_pile(Side::Upper).len(),
        ],
    };

    let phase = match &state.phase {
        Phase::Dealing => PhaseSnapshot::Dealing,
        Phase::AwaitingPlay { side } => PhaseSnapshot::AwaitingPlay { to_act: *side },
        Phase::AwaitingCaptureChoice {
            side,
            played,
            options,
        } => PhaseSnapshot::AwaitingCaptureChoice {
            to_act: *side,
            played: *played,
            options: (*side == viewer).then(|| options.clone()),
        },
        Phase::RoundSweep => PhaseSnapshot::RoundSweep,
        Phase::RoundScoring => {
            let (lower, upper) = compute_score(state);
            PhaseSnapshot::RoundScoring(ScoringSnapshot { lower, upper })
        }
    };

    GameSnapshot {
        round,
        hand: state.hand(viewer).to_vec(),
        opponent_hand_size: state.hand(viewer.other()).len(),
        centre: state.centre.clone(),
        phase,
    }
}
