use crate::domain::state::{GameState, Phase, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a side became the one expected to act.
    TurnBecame { side: Side },

    /// Edge-triggered: a play produced several captures to choose from.
    CaptureChoiceRequired { side: Side },

    /// Edge-triggered: a side's scopa counter went up.
    ScopaScored { side: Side },

    /// Edge-triggered: hands ran out and a re-deal started.
    DealStarted,

    /// Edge-triggered: the round reached its sweep.
    RoundSwept,

    /// Edge-triggered: the round reached `RoundScoring`.
    RoundEnded,
}

/// Derive presentation transitions from before/after states.
pub fn derive_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Scopas, in seat order
    for side in Side::BOTH {
        if after.scopa_count(side) > before.scopa_count(side) {
            transitions.push(GameTransition::ScopaScored { side });
        }
    }

    // 2. Actor change
    if let Phase::AwaitingCaptureChoice { side, .. } = after.phase {
        if !matches!(before.phase, Phase::AwaitingCaptureChoice { .. }) {
            transitions.push(GameTransition::CaptureChoiceRequired { side });
        }
    } else if let Phase::AwaitingPlay { side } = after.phase {
        if before.phase.actor() != Some(side) {
            transitions.push(GameTransition::TurnBecame { side });
        }
    }

    // 3. Phase edges
    if before.phase != Phase::Dealing && after.phase == Phase::Dealing {
        transitions.push(GameTransition::DealStarted);
    }
    if before.phase != Phase::RoundSweep && after.phase == Phase::RoundSweep {
        transitions.push(GameTransition::RoundSwept);
    }
    if before.phase != Phase::RoundScoring && after.phase == Phase::RoundScoring {
        transitions.push(GameTransition::RoundEnded);
    }

    transitions
}
