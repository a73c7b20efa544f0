//! AI configuration handling.
//!
//! Provides a typed interface over a JSON config blob, extracting the
//! standard fields while preserving AI-specific custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Per-priority coefficients for the heuristic's weighted combiner.
///
/// Missing fields default to 1, so `{"scopa": 3}` only boosts scopas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub cards: i64,
    pub scopa: i64,
    pub gold_seven: i64,
    pub sevens: i64,
    pub golds: i64,
    pub napola: i64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            cards: 1,
            scopa: 1,
            gold_seven: 1,
            sevens: 1,
            golds: 1,
            napola: 1,
        }
    }
}

/// Standard configuration for AI players.
///
/// # Standard Fields
///
/// - `seed`: Optional RNG seed for deterministic behavior. Randomised AIs
///   seed their generator from it; deterministic AIs ignore it.
/// - `weights`: Optional coefficients; when present the heuristic combines its
///   priorities with them instead of a plain sum.
///
/// # Example JSON Config
///
/// ```json
/// {
///   "seed": 12345,
///   "weights": {"scopa": 3, "cards": 2},
///   "note": "kept in custom"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<PriorityWeights>,

    /// AI-specific configuration not covered by the standard fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON value.
    ///
    /// A malformed config falls back to the empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn weights(&self) -> Option<PriorityWeights> {
        self.weights
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no weights, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            weights: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
