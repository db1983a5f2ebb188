//! Single-event command implementation
//!
//! Samples one Bernoulli event many times and compares the empirical
//! success frequency against the supplied probability.

use serde::Serialize;
use tracing::info;

use prob_engine::sample::{bernoulli_sample, generate_batch};
use prob_engine::stats::bernoulli_mean;

use super::{check_format, clamp_probability, make_rng, trial_config};
use crate::Result;

/// JSON-serialisable report of one single-event run.
#[derive(Serialize)]
struct SingleReport {
    probability: f64,
    trials: usize,
    seed: u64,
    empirical_frequency: f64,
    deviation: f64,
}

/// Run the single command
pub fn run(probability: f64, trials: usize, seed: Option<u64>, format: &str) -> Result<()> {
    check_format(format)?;
    let p = clamp_probability(probability);
    let config = trial_config(trials, seed)?;

    info!("Sampling single event...");
    info!("  Probability: {}", p);
    info!("  Trials: {}", config.n_trials());

    let mut rng = make_rng(&config);
    let used_seed = rng.seed();
    let outcomes = generate_batch(&mut rng, config.n_trials(), |rng| bernoulli_sample(rng, p));

    let empirical = bernoulli_mean(&outcomes);
    let deviation = (empirical - p).abs();

    match format {
        "json" => {
            let report = SingleReport {
                probability: p,
                trials: config.n_trials(),
                seed: used_seed,
                empirical_frequency: empirical,
                deviation,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!();
            println!("Single event, {} trials (seed {})", config.n_trials(), used_seed);
            println!("--------------------------------------------------");
            println!("{:<22} {:>12} {:>12}", "", "Empirical", "Theoretical");
            println!("--------------------------------------------------");
            println!("{:<22} {:>12.6} {:>12.6}", "Event occurred", empirical, p);
            println!(
                "{:<22} {:>12.6} {:>12.6}",
                "Event did not occur",
                1.0 - empirical,
                1.0 - p
            );
            println!("--------------------------------------------------");
            println!("Absolute deviation: {:.6}", deviation);
        }
    }

    info!("Single event run complete");
    Ok(())
}
