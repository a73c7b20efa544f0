//! Fixed table rules for two-player Scopa.

pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 3;
/// Cards laid face up on the first deal of a round only.
pub const INITIAL_CENTRE: usize = 4;

/// Won cards needed to take the carte point outright (20 each is a draw).
pub const CARTE_MAJORITY: usize = 20;
/// Coins needed to take the ori point outright (5 each is a draw).
pub const ORI_MAJORITY: usize = 5;
/// Sevens needed to take the sette point outright (2 each goes to the sixes).
pub const SETTE_MAJORITY: usize = 2;
