
mod config;
mod fuzz;
mod report;
mod trace;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pad::error::PadError;
use tracing::info;

use crate::fuzz::{FuzzParams, FuzzReport};
use crate::trace::ReplaySummary;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig { path: String, source: io::Error },
    #[error("failed to read trace {path}: {source}")]
    ReadTrace { path: String, source: io::Error },
    #[error("invalid trace: {0}")]
    InvalidTrace(#[source] serde_json::Error),
    #[error("{0}")]
    Pad(#[from] PadError),
    #[error("failed to encode summary: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("clamp invariant violated {violations} time(s); max distance {max_distance} > radius {outer_radius}")]
    ClampViolation { violations: usize, max_distance: f64, outer_radius: f64 },
}

#[derive(Parser, Debug)]
#[command(name = "rocker", about = "Replay and fuzz virtual joystick input")]
struct Cli {
    /// Pad config file (JSON).
    #[arg(long, env = "ROCKER_CONFIG")]
    config: Option<PathBuf>,

    /// Outer radius override, in pixels.
    #[arg(long, env = "ROCKER_OUTER_RADIUS")]
    outer_radius: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded pointer trace.
    Replay(ReplayArgs),
    /// Drive the pad with seeded random drags and check the clamp invariant.
    Fuzz(FuzzArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(default_value = "-", help = "Trace file path, or - for stdin")]
    input: String,

    /// Wait for each entry's `at_ms` before applying it.
    #[arg(long, default_value_t = false)]
    paced: bool,

    /// Print the summary as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct FuzzArgs {
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(long, default_value_t = 240)]
    width: u32,

    #[arg(long, default_value_t = 240)]
    height: u32,

    /// How far past the pad bounds samples may land, as a multiple of its size.
    #[arg(long, default_value_t = 1.0, value_parser = parse_spread)]
    spread: f64,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pad_config = config::load_pad_config(cli.config.as_deref(), cli.outer_radius)?;
    let mut core = config::build_core(&pad_config)?;

    match cli.command {
        Command::Replay(args) => run_replay(&mut core, args).await,
        Command::Fuzz(args) => run_fuzz(&mut core, args),
    }
}

async fn run_replay(core: &mut pad::engine::PadCore, args: ReplayArgs) -> Result<(), CliError> {
    let text = read_input(&args.input)?;
    let entries = trace::parse_trace(&text).map_err(CliError::InvalidTrace)?;
    info!(entries = entries.len(), paced = args.paced, "replaying trace");

    let summary = if args.paced {
        trace::replay_paced(core, &entries).await
    } else {
        trace::replay(core, &entries)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary).map_err(CliError::Encode)?);
    } else {
        print_replay_summary(&summary);
    }
    Ok(())
}

fn run_fuzz(core: &mut pad::engine::PadCore, args: FuzzArgs) -> Result<(), CliError> {
    let params = FuzzParams {
        samples: args.samples,
        seed: args.seed,
        width: args.width,
        height: args.height,
        spread: args.spread,
    };
    info!(samples = params.samples, seed = params.seed, "fuzzing pad");
    let report = fuzz::fuzz(core, params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(CliError::Encode)?);
    } else {
        print_fuzz_report(&report);
    }

    if !report.passed() {
        return Err(CliError::ClampViolation {
            violations: report.violations,
            max_distance: report.max_distance,
            outer_radius: report.outer_radius,
        });
    }
    Ok(())
}

fn parse_spread(raw: &str) -> Result<f64, String> {
    let spread: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !spread.is_finite() || spread < 0.0 {
        return Err(format!("spread must be a finite number no less than zero, got {raw}"));
    }
    if spread > fuzz::MAX_SPREAD {
        return Err(format!("spread must be at most {}", fuzz::MAX_SPREAD));
    }
    Ok(spread)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::ReadTrace { path: "<stdin>".to_owned(), source })?;
        return Ok(text);
    }
    fs::read_to_string(input).map_err(|source| CliError::ReadTrace { path: input.to_owned(), source })
}

fn print_replay_summary(summary: &ReplaySummary) {
    println!("events:   {}", summary.events);
    println!("samples:  {}", summary.samples);
    println!("renders:  {}", summary.renders);
    println!("center:   ({:.1}, {:.1})  radius {:.1}", summary.center.x, summary.center.y, summary.outer_radius);
    println!(
        "handle:   ({:.1}, {:.1})  {:?}",
        summary.final_position.x, summary.final_position.y, summary.final_state
    );
    println!("readings:\n{}", summary.readings);
}

fn print_fuzz_report(report: &FuzzReport) {
    println!("samples:    {}", report.samples);
    println!("sessions:   {}", report.sessions);
    println!("radius:     {:.3}", report.outer_radius);
    println!("max dist:   {:.3}", report.max_distance);
    println!("violations: {}", report.violations);
    println!("readings:\n{}", report.readings);
}
