//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::VisibleState;
use crate::domain::Move;
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI failed to make a decision within timeout
    Timeout,
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Timeout => write!(f, "AI decision timeout"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::InvalidMove(msg) => DomainError::invalid_move(format!("AI: {msg}")),
            other => DomainError::invariant(format!("AI error: {other}")),
        }
    }
}

/// Trait for AI players.
///
/// Implementations receive the state visible to their side and must return a
/// complete legal move. `VisibleState::legal_moves` lists every candidate.
pub trait AiPlayer: Send + Sync {
    /// Choose the card to play and, when it captures, which cards to take.
    fn choose_move(&self, state: &VisibleState) -> Result<Move, AiError>;
}
