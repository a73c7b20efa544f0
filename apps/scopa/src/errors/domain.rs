//! Domain-level error type returned by every engine command.
//!
//! Commands either fully succeed or leave the input state untouched and
//! return one of these. Nothing here is ever auto-corrected; translating an
//! error into user-visible feedback is the caller's job.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The played card is not in the active side's hand.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// Capture-choice index outside the pending option list.
    #[error("invalid option: {0}")]
    InvalidOption(String),
    /// Command issued in a phase that does not accept it.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A deal was requested with nothing left to draw.
    #[error("deck exhausted")]
    DeckExhausted,
    /// Engine or AI reached a state the rules make impossible.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
    /// Malformed card token.
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::InvalidMove(detail.into())
    }
    pub fn invalid_option(detail: impl Into<String>) -> Self {
        Self::InvalidOption(detail.into())
    }
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InternalInvariant(detail.into())
    }

    /// Stable code for this error kind.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidMove(_) => ErrorCode::InvalidMove,
            Self::InvalidOption(_) => ErrorCode::InvalidOption,
            Self::InvalidState(_) => ErrorCode::InvalidState,
            Self::DeckExhausted => ErrorCode::DeckExhausted,
            Self::InternalInvariant(_) => ErrorCode::InternalInvariant,
            Self::ParseCard(_) => ErrorCode::ParseCard,
        }
    }
}
