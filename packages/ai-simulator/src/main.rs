//! AI Simulator CLI - headless Scopa rounds between two registered AIs.
//!
//! Rounds run entirely in memory through the engine's round driver; results
//! go to a JSONL (or JSON) detail file and a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::{build_round_metrics, RunSummary};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Headless Scopa simulator for comparing AI players")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI playing the lower side
    #[arg(long, default_value = "heuristic")]
    lower: AiType,

    /// AI playing the upper side
    #[arg(long, default_value = "heuristic")]
    upper: AiType,

    /// Game seed; every round and AI seed derives from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ai_types = [args.lower, args.upper];
    let ai_names = [ai_types[0].name().to_string(), ai_types[1].name().to_string()];
    let mut simulator = Simulator::new(args.seed, ai_types);
    info!(
        rounds = args.games,
        lower = %ai_names[0],
        upper = %ai_names[1],
        game_seed = simulator.game_seed(),
        "Starting AI simulator"
    );

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut summary = RunSummary::default();
    let mut errors = 0u32;

    for _ in 0..args.games {
        let round_start = Instant::now();
        match simulator.simulate_round() {
            Ok(result) => {
                let duration_ms = round_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_round_metrics(&result, ai_names.clone(), args.games, duration_ms);
                if let Err(e) = output_writer.write_round(&metrics) {
                    warn!("Failed to write metrics for round {}: {}", result.round_no, e);
                }
                summary.record(&result);
            }
            Err(e) => {
                errors += 1;
                warn!("{e}");
                // The failed round cannot be restarted from; stop here.
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&summary, &ai_names, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    summary: &RunSummary,
    ai_names: &[String; 2],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Rounds completed: {}/{}", summary.rounds, total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if summary.rounds == 0 {
        return;
    }
    println!("Average time per round: {:?}", elapsed / summary.rounds);
    println!("Draws: {}", summary.draws);

    println!("\n=== Results by Side ===");
    for (side, label) in ["lower", "upper"].iter().enumerate() {
        println!(
            "{} ({}): avg={:.2}, max={}, scopas={}, wins={} ({:.1}%)",
            label,
            ai_names[side],
            summary.avg_points(side),
            summary.max_points[side],
            summary.scopas[side],
            summary.wins[side],
            summary.win_rate(side)
        );
    }
}
