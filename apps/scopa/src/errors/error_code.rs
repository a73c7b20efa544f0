//! Error codes for the Scopa engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings a
//! presentation layer should key its messages on.

use core::fmt;

/// Centralized error codes, one per `DomainError` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Card not in the active hand
    InvalidMove,
    /// Capture choice out of range
    InvalidOption,
    /// Command not allowed in the current phase
    InvalidState,
    /// Deal requested from an empty deck
    DeckExhausted,
    /// Rules-impossible state reached
    InternalInvariant,
    /// Parse card error
    ParseCard,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidMove => "INVALID_MOVE",
            Self::InvalidOption => "INVALID_OPTION",
            Self::InvalidState => "INVALID_STATE",
            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::InternalInvariant => "INTERNAL_INVARIANT",
            Self::ParseCard => "PARSE_CARD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
