//! Shared types for the simulator.

use clap::ValueEnum;
use scopa::ai::{Heuristic, RandomPlayer};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per round, written as the round finishes
    Jsonl,
    /// A single JSON array written once all rounds are done
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Name under which the AI is registered.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => Heuristic::NAME,
            AiType::Random => RandomPlayer::NAME,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("Unknown AI type: {0}")]
    UnknownAi(String),
    #[error("Round {round_no} failed: {source}")]
    Round {
        round_no: u32,
        #[source]
        source: scopa::DomainError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
