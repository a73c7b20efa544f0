//! Metrics collection and output for AI simulation results.

use scopa::domain::{Outcome, ScoreBreakdown};
use serde::Serialize;

use crate::simulator::RoundResult;

/// Complete round metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub game_seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: RoundResultMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub ai_types: [String; 2],
    pub total_rounds: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundResultMetrics {
    pub outcome: Outcome,
    pub lower: ScoreBreakdown,
    pub upper: ScoreBreakdown,
    pub totals: [u32; 2],
    pub scopas: [u32; 2],
    pub plays: usize,
    pub duration_ms: f64,
}

pub fn build_round_metrics(
    result: &RoundResult,
    ai_types: [String; 2],
    total_rounds: u32,
    duration_ms: f64,
) -> RoundMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    RoundMetrics {
        round_no: result.round_no,
        game_seed: result.game_seed,
        timestamp,
        config: RunConfig {
            ai_types,
            total_rounds,
        },
        result: RoundResultMetrics {
            outcome: result.outcome,
            lower: result.lower,
            upper: result.upper,
            totals: [result.lower.total(), result.upper.total()],
            scopas: [result.lower.scopa, result.upper.scopa],
            plays: result.plays,
            duration_ms,
        },
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub round_no: u32,
    pub game_seed: u64,
    pub winner: &'static str,
    pub lower_score: u32,
    pub upper_score: u32,
    pub lower_scopas: u32,
    pub upper_scopas: u32,
    pub lower_ai: String,
    pub upper_ai: String,
}

impl From<&RoundMetrics> for CsvSummaryRow {
    fn from(metrics: &RoundMetrics) -> Self {
        let winner = match metrics.result.outcome {
            Outcome::Lower => "lower",
            Outcome::Upper => "upper",
            Outcome::Draw => "draw",
        };
        CsvSummaryRow {
            round_no: metrics.round_no,
            game_seed: metrics.game_seed,
            winner,
            lower_score: metrics.result.totals[0],
            upper_score: metrics.result.totals[1],
            lower_scopas: metrics.result.scopas[0],
            upper_scopas: metrics.result.scopas[1],
            lower_ai: metrics.config.ai_types[0].clone(),
            upper_ai: metrics.config.ai_types[1].clone(),
        }
    }
}

/// Aggregate statistics across all simulated rounds, per side.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rounds: u32,
    pub draws: u32,
    pub wins: [u32; 2],
    pub total_points: [u64; 2],
    pub max_points: [u32; 2],
    pub scopas: [u64; 2],
}

impl RunSummary {
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome.winner() {
            Some(side) => self.wins[side.index()] += 1,
            None => self.draws += 1,
        }
        for (i, breakdown) in [result.lower, result.upper].iter().enumerate() {
            let total = breakdown.total();
            self.total_points[i] += u64::from(total);
            self.max_points[i] = self.max_points[i].max(total);
            self.scopas[i] += u64::from(breakdown.scopa);
        }
    }

    pub fn win_rate(&self, side: usize) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        f64::from(self.wins[side]) / f64::from(self.rounds) * 100.0
    }

    pub fn avg_points(&self, side: usize) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_points[side] as f64 / f64::from(self.rounds)
    }
}
