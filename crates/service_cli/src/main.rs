//! Problab CLI - Command Line Operations for Probability Experiments
//!
//! This is the operational entry point for the discrete-probability
//! sampling workspace.
//!
//! # Commands
//!
//! - `problab single` - One Bernoulli event, empirical frequency vs p
//! - `problab combinations` - Combinations of independent events
//! - `problab conditional` - Conditional two-event partition
//! - `problab group` - Complete group of events
//! - `problab wheel` - Donation-weighted lottery wheel
//!
//! Every command draws a large seeded batch through `prob_engine` and
//! prints the empirical frequency table next to the theoretical
//! distribution from `prob_core`.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Problab Discrete-Probability Experiment CLI
#[derive(Parser)]
#[command(name = "problab")]
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
    /// Sample a single Bernoulli event
    Single {
        /// Success probability, clamped to [0, 1]
        #[arg(short, long)]
        probability: f64,

        /// Number of independent trials
        #[arg(short, long, default_value = "1000000")]
        trials: usize,

        /// Seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample combinations of independent events
    Combinations {
        /// Per-event probabilities, comma separated, each clamped to [0, 1]
        #[arg(short, long, value_delimiter = ',', required = true)]
        probabilities: Vec<f64>,

        /// Number of independent trials
        #[arg(short, long, default_value = "1000000")]
        trials: usize,

        /// Seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample the conditional two-event partition
    Conditional {
        /// P(A), clamped to [0, 1]
        #[arg(long)]
        p_a: f64,

        /// P(B|A), clamped to [0, 1]
        #[arg(long)]
        p_b_given_a: f64,

        /// Number of independent trials
        #[arg(short, long, default_value = "1000000")]
        trials: usize,

        /// Seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample a complete group of events
    Group {
        /// Category probabilities, comma separated; must sum to 1
        #[arg(short, long, value_delimiter = ',', required = true)]
        probabilities: Vec<f64>,

        /// Number of independent trials
        #[arg(short, long, default_value = "1000000")]
        trials: usize,

        /// Seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Spin the donation-weighted lottery wheel
    Wheel {
        /// Donations as label:amount, repeatable
        #[arg(short, long = "donation", required = true)]
        donations: Vec<String>,

        /// Number of spins
        #[arg(long, default_value = "1000000")]
        spins: usize,

        /// Seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
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
        Commands::Single {
            probability,
            trials,
            seed,
            format,
        } => commands::single::run(probability, trials, seed, &format),
        Commands::Combinations {
            probabilities,
            trials,
            seed,
            format,
        } => commands::combinations::run(&probabilities, trials, seed, &format),
        Commands::Conditional {
            p_a,
            p_b_given_a,
            trials,
            seed,
            format,
        } => commands::conditional::run(p_a, p_b_given_a, trials, seed, &format),
        Commands::Group {
            probabilities,
            trials,
            seed,
            format,
        } => commands::group::run(&probabilities, trials, seed, &format),
        Commands::Wheel {
            donations,
            spins,
            seed,
            format,
        } => commands::wheel::run(&donations, spins, seed, &format),
    }
}
