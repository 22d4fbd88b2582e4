//! pvar CLI - scenario risk runs from the command line
//!
//! # Commands
//!
//! - `pvar run <n_trades> <n_threads>` - revalue a demo portfolio over the
//!   scenario set on a local bounded worker pool
//! - `pvar run-sharded <n_trades> <n_slices>` - same computation over
//!   partitioned shard workers
//!
//! Both commands print `Results size = <len>` on success or
//! `Calculation failed: <message>` on failure; failure additionally exits
//! with a non-zero status.

use clap::{Parser, Subcommand};
use pvar_engine::{CalculationConfig, DEFAULT_N_SCENARIOS, DEFAULT_SHIFT_RANGE_BP};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod pricing;

pub use error::{CliError, Result};

/// pvar scenario risk CLI
#[derive(Parser)]
#[command(name = "pvar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario revaluation on a local worker pool
    Run {
        /// Number of trades in the demo portfolio
        n_trades: usize,

        /// Number of worker threads
        n_threads: usize,

        /// Number of scenarios, baseline included
        #[arg(long, default_value_t = DEFAULT_N_SCENARIOS)]
        scenarios: usize,

        /// Width of the random shift range in basis points
        #[arg(long, default_value_t = DEFAULT_SHIFT_RANGE_BP)]
        shift_range_bp: f64,

        /// Seed for reproducible scenario generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a scenario revaluation across partitioned shard workers
    RunSharded {
        /// Number of trades in the demo portfolio
        n_trades: usize,

        /// Number of shards to partition the scenario set into
        n_slices: usize,

        /// Number of scenarios, baseline included
        #[arg(long, default_value_t = DEFAULT_N_SCENARIOS)]
        scenarios: usize,

        /// Width of the random shift range in basis points
        #[arg(long, default_value_t = DEFAULT_SHIFT_RANGE_BP)]
        shift_range_bp: f64,

        /// Seed for reproducible scenario generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn config(scenarios: usize, shift_range_bp: f64, seed: Option<u64>) -> CalculationConfig {
    let config = CalculationConfig::new()
        .with_scenarios(scenarios)
        .with_shift_range_bp(shift_range_bp);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            n_trades,
            n_threads,
            scenarios,
            shift_range_bp,
            seed,
        } => commands::run_local::run(n_trades, n_threads, config(scenarios, shift_range_bp, seed)),
        Commands::RunSharded {
            n_trades,
            n_slices,
            scenarios,
            shift_range_bp,
            seed,
        } => {
            commands::run_sharded::run(n_trades, n_slices, config(scenarios, shift_range_bp, seed))
        }
    }
}
