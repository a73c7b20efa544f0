//! Core card-related types: Card, Suit

/// The four Italian suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Coins,
    Clubs,
    Cups,
    Swords,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Coins, Suit::Clubs, Suit::Cups, Suit::Swords];
}

/// A card of the 40-card Italian deck. `value` is 1 (Ace) to 10 (King).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

pub const MIN_VALUE: u8 = 1;
pub const MAX_VALUE: u8 = 10;

/// The 7 of Coins.
pub const SETTEBELLO: Card = Card {
    suit: Suit::Coins,
    value: 7,
};

/// Ace, 2 and 3 of Coins: the base of a napola run.
pub const NAPOLA_BASE: [Card; 3] = [
    Card {
        suit: Suit::Coins,
        value: 1,
    },
    Card {
        suit: Suit::Coins,
        value: 2,
    },
    Card {
        suit: Suit::Coins,
        value: 3,
    },
];

impl Card {
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    #[inline]
    pub fn is_coins(&self) -> bool {
        self.suit == Suit::Coins
    }
}

// Note: Ord on Card is only for stable sorting: suit order Coins<Clubs<Cups<Swords then value.
// Capture sums and scoring never compare cards through it.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Count the Coins-suit cards in `cards`.
pub fn count_coins(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_coins()).count()
}

/// Count the cards of a given value in `cards`.
pub fn count_value(cards: &[Card], value: u8) -> usize {
    cards.iter().filter(|c| c.value == value).count()
}

/// Count how many of the napola base cards appear in `cards`.
pub fn count_napola_base(cards: &[Card]) -> usize {
    NAPOLA_BASE.iter().filter(|n| cards.contains(n)).count()
}
