//! Card parsing and formatting for the token form (e.g. "7D", "10S").
//!
//! Suit letters follow the Italian names: D = denari (Coins),
//! B = bastoni (Clubs), C = coppe (Cups), S = spade (Swords).

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Suit, MAX_VALUE, MIN_VALUE};
use crate::errors::domain::DomainError;

impl Suit {
    pub const fn letter(&self) -> char {
        match self {
            Suit::Coins => 'D',
            Suit::Clubs => 'B',
            Suit::Cups => 'C',
            Suit::Swords => 'S',
        }
    }

    pub fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'D' => Some(Suit::Coins),
            'B' => Some(Suit::Clubs),
            'C' => Some(Suit::Cups),
            'S' => Some(Suit::Swords),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || DomainError::ParseCard(s.to_string());

        let suit_ch = s.chars().last().ok_or_else(bad)?;
        let suit = Suit::from_letter(suit_ch).ok_or_else(bad)?;
        let digits = &s[..s.len() - suit_ch.len_utf8()];
        // Reject signs, whitespace and leading zeros that u8::from_str would accept or mangle.
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(bad());
        }
        let value: u8 = digits.parse().map_err(|_| bad())?;
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(bad());
        }
        Ok(Card { suit, value })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
