//! Running-total accumulator CLI.
//!
//! Hosts the `tally` library for interactive use: feed integer deltas to
//! an accumulator (`sum`), aggregate min/max/sum statistics (`stats`), or
//! scaffold a config file (`init`). Stdout carries only command output;
//! diagnostics go to stderr.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::debug;

use tally::config::{TallyConfig, load_config, write_config};
use tally::core::accumulator::{Accumulator, running_totals};
use tally::core::stats::summarize;
use tally::exit_codes;
use tally::input::read_values;
use tally::logging;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Isolated running-total accumulators for integer streams"
)]
struct Cli {
    /// Path to the config file.
    #[arg(long, default_value = "tally.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `tally.toml` if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Feed deltas to an accumulator and print each running total.
    Sum {
        /// Starting total (overrides config `initial`).
        #[arg(long, allow_negative_numbers = true)]
        initial: Option<i64>,
        /// Deltas to apply; reads whitespace-separated values from stdin
        /// when omitted.
        #[arg(allow_negative_numbers = true)]
        deltas: Vec<i64>,
    },
    /// Aggregate min/max/sum/count over values.
    Stats {
        /// Values to aggregate; reads whitespace-separated values from
        /// stdin when omitted.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Sum { initial, deltas } => cmd_sum(&cli.config, initial, deltas),
        Command::Stats { values } => cmd_stats(&cli.config, values),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }
    write_config(config_path, &TallyConfig::default())?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_sum(config_path: &Path, initial: Option<i64>, deltas: Vec<i64>) -> Result<i32> {
    let cfg = load_config(config_path)?;
    let deltas = values_or_stdin(deltas, &cfg)?;
    if deltas.is_empty() {
        eprintln!("no deltas provided");
        return Ok(exit_codes::EMPTY);
    }

    let start = initial.unwrap_or(cfg.initial);
    debug!(start, count = deltas.len(), "summing deltas");
    let mut unit = Accumulator::new(start);
    for total in running_totals(&mut unit, &deltas) {
        println!("{total}");
    }
    Ok(exit_codes::OK)
}

fn cmd_stats(config_path: &Path, values: Vec<i64>) -> Result<i32> {
    let cfg = load_config(config_path)?;
    let values = values_or_stdin(values, &cfg)?;
    debug!(count = values.len(), "aggregating values");
    match summarize(&values) {
        Some(summary) => {
            println!(
                "min={} max={} sum={} count={}",
                summary.min, summary.max, summary.sum, summary.count
            );
            Ok(exit_codes::OK)
        }
        None => {
            eprintln!("no values provided");
            Ok(exit_codes::EMPTY)
        }
    }
}

/// Use positional values when present; otherwise read stdin (bounded).
fn values_or_stdin(args: Vec<i64>, cfg: &TallyConfig) -> Result<Vec<i64>> {
    if !args.is_empty() {
        return Ok(args);
    }
    read_values(io::stdin().lock(), cfg.input_limit_bytes).context("read values from stdin")
}
