//! Reproducible inputs shared by test suites.
//!
//! Fixtures are plain tokens and seeds so this crate never depends on the
//! engine it tests.

/// Stable seed for a named test: same name, same seed, on every run.
///
/// FNV-1a over the name bytes.
pub fn seed_for(name: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// A spread of game seeds for table-driven whole-round tests.
pub fn seed_matrix(count: usize) -> Vec<u64> {
    (0..count)
        .map(|i| seed_for(&format!("round-{i}")))
        .collect()
}

/// Centre where a played 6 captures both cards and clears the table.
pub const CLEARING_CENTRE: [&str; 2] = ["2D", "4D"];

/// Centre where a played 7 must take the lone 7 rather than 3 + 4.
pub const FORCED_SINGLE_CENTRE: [&str; 3] = ["3S", "4D", "7B"];

/// Ace to 5 of Coins without the 6: a napola worth 4.
pub const NAPOLA_TO_FIVE: [&str; 5] = ["1D", "2D", "3D", "4D", "5D"];
