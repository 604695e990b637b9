//! Match simulator CLI - plays whole bot-vs-bot matches in memory and writes
//! JSONL/CSV results.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use metrics::{build_match_metrics, MatchConfig};
use output::OutputWriter;
use referee::ai::{by_name, LowestCard, RandomPlayer};
use referee::domain::derive_bot_seed;
use referee::domain::events::MatchResult;
use referee::domain::match_flow::{MatchRules, TiePolicy};
use referee::domain::rules::DEFAULT_MATCH_DEALS;
use referee::domain::state::seat_from_player_no;
use referee::AppError;
use simulator::{Bots, MatchOutcome, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "In-memory Sueca match simulator for bot evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Bot for all seats (shortcut to set all 4 seats to the same bot)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// Bot for seat 0 (player 1)
    #[arg(long, default_value = "lowest")]
    seat0: AiType,

    /// Bot for seat 1 (player 2)
    #[arg(long, default_value = "lowest")]
    seat1: AiType,

    /// Bot for seat 2 (player 3)
    #[arg(long, default_value = "lowest")]
    seat2: AiType,

    /// Bot for seat 3 (player 4)
    #[arg(long, default_value = "lowest")]
    seat3: AiType,

    /// Deals per match
    #[arg(long, default_value_t = DEFAULT_MATCH_DEALS)]
    deals: u8,

    /// What to do when credits are level after the last deal
    #[arg(long, default_value = "surface")]
    tie_policy: TiePolicyArg,

    /// Player number (1-4) dealing the first deal
    #[arg(long, default_value = "1")]
    first_dealer: u8,

    /// Base seed; match N uses seed + N. Random when omitted.
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

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum AiType {
    Lowest,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Lowest => LowestCard::NAME,
            AiType::Random => RandomPlayer::NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TiePolicyArg {
    Surface,
    SuddenDeath,
}

impl From<TiePolicyArg> for TiePolicy {
    fn from(arg: TiePolicyArg) -> Self {
        match arg {
            TiePolicyArg::Surface => TiePolicy::Surface,
            TiePolicyArg::SuddenDeath => TiePolicy::SuddenDeath,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types = match args.seats.clone() {
        Some(ai) => [ai.clone(), ai.clone(), ai.clone(), ai],
        None => [
            args.seat0.clone(),
            args.seat1.clone(),
            args.seat2.clone(),
            args.seat3.clone(),
        ],
    };
    let ai_types: [String; 4] = std::array::from_fn(|i| seat_types[i].name().to_string());

    let rules = MatchRules {
        deals: args.deals,
        tie_policy: args.tie_policy.into(),
    };
    let first_dealer = seat_from_player_no(args.first_dealer)?;

    if args.show_output {
        info!(matches = args.matches, ?rules, ?ai_types, "Starting match simulator");
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut outcomes = Vec::new();
    let mut errors = 0u32;

    for match_id in 1..=args.matches {
        let match_start = Instant::now();
        let seed = base_seed.wrapping_add(match_id as u64);

        match run_match(seed, rules, first_dealer, &ai_types) {
            Ok(outcome) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let config = MatchConfig {
                    ai_types: ai_types.clone(),
                    total_matches: args.matches,
                    match_deals: args.deals,
                };
                let metrics = build_match_metrics(
                    match_id,
                    seed,
                    config,
                    &outcome,
                    args.metrics_level,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_id, e);
                }
                if args.verbose {
                    info!(match_id, result = ?outcome.result, credits = ?outcome.victory_credits, "Match completed");
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_id, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&outcomes, errors, elapsed, args.matches);
    }

    Ok(())
}

fn run_match(
    seed: u64,
    rules: MatchRules,
    first_dealer: u8,
    ai_types: &[String; 4],
) -> Result<MatchOutcome, AppError> {
    let mut bots = Vec::with_capacity(4);
    for (seat, name) in ai_types.iter().enumerate() {
        let factory =
            by_name(name).ok_or_else(|| AppError::internal(format!("Unknown AI type: {name}")))?;
        bots.push((factory.make)(Some(derive_bot_seed(seed, seat as u8))));
    }
    let bots: Bots = bots
        .try_into()
        .map_err(|_| AppError::internal("expected four bots".into()))?;

    Simulator::new(seed, rules, first_dealer).simulate_match(&bots)
}

fn print_summary(outcomes: &[MatchOutcome], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", outcomes.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if outcomes.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / outcomes.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    let mut credits = [0u64; 2];
    let mut revokes = 0usize;
    for outcome in outcomes {
        match outcome.result {
            MatchResult::Winner { team } => wins[team.index()] += 1,
            MatchResult::Ambiguous => ties += 1,
        }
        credits[0] += outcome.victory_credits[0] as u64;
        credits[1] += outcome.victory_credits[1] as u64;
        revokes += outcome.revokes();
    }

    let n = outcomes.len() as f64;
    println!("\n=== Results by Team ===");
    for team in 0..2 {
        println!(
            "Team {}: wins={} ({:.1}%), avg credits={:.2}",
            team + 1,
            wins[team],
            wins[team] as f64 / n * 100.0,
            credits[team] as f64 / n
        );
    }
    println!("Tied matches: {}", ties);
    println!("Revokes called: {}", revokes);
}
