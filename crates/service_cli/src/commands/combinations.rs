//! Combinations command implementation
//!
//! Samples combinations of independent events and compares the empirical
//! frequency of every bitmask against the product-form theoretical
//! distribution, together with the per-event marginals.

use serde::Serialize;
use tracing::info;

use prob_core::theoretical::{
    combination_label, combination_probabilities, combination_short_label,
};
use prob_engine::freq::{combination_frequencies, marginal_event_frequencies};
use prob_engine::sample::{generate_batch, independent_combination_sample};

use super::{check_format, clamp_probability, make_rng, trial_config};
use crate::{CliError, Result};

/// Keeps the 2^k comparison table printable.
const MAX_EVENTS: usize = 16;

/// JSON-serialisable report of one combinations run.
#[derive(Serialize)]
struct CombinationsReport {
    probabilities: Vec<f64>,
    trials: usize,
    seed: u64,
    combinations: Vec<CombinationRow>,
    marginal_frequencies: Vec<f64>,
}

#[derive(Serialize)]
struct CombinationRow {
    mask: String,
    label: String,
    empirical: f64,
    theoretical: f64,
}

/// Run the combinations command
pub fn run(probabilities: &[f64], trials: usize, seed: Option<u64>, format: &str) -> Result<()> {
    check_format(format)?;
    if probabilities.len() > MAX_EVENTS {
        return Err(CliError::InvalidArgument(format!(
            "too many events: {} (maximum {})",
            probabilities.len(),
            MAX_EVENTS
        )));
    }

    let probs: Vec<f64> = probabilities.iter().copied().map(clamp_probability).collect();
    let config = trial_config(trials, seed)?;

    info!("Sampling event combinations...");
    info!("  Events: {}", probs.len());
    info!("  Trials: {}", config.n_trials());

    let mut rng = make_rng(&config);
    let used_seed = rng.seed();
    let masks = generate_batch(&mut rng, config.n_trials(), |rng| {
        independent_combination_sample(rng, &probs)
    });

    let empirical = combination_frequencies(&masks, probs.len());
    let theoretical = combination_probabilities(&probs);
    let marginals = marginal_event_frequencies(&masks, probs.len());

    match format {
        "json" => {
            let combinations = empirical
                .iter()
                .zip(&theoretical)
                .enumerate()
                .map(|(mask, (&f, &p))| CombinationRow {
                    mask: combination_short_label(mask, probs.len()),
                    label: combination_label(mask, probs.len()),
                    empirical: f,
                    theoretical: p,
                })
                .collect();
            let report = CombinationsReport {
                probabilities: probs,
                trials: config.n_trials(),
                seed: used_seed,
                combinations,
                marginal_frequencies: marginals,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!();
            println!(
                "Combinations of {} events, {} trials (seed {})",
                probs.len(),
                config.n_trials(),
                used_seed
            );
            println!("------------------------------------------------------------------");
            println!(
                "{:<8} {:<24} {:>12} {:>12}",
                "Mask", "Combination", "Empirical", "Theoretical"
            );
            println!("------------------------------------------------------------------");
            for (mask, (&f, &p)) in empirical.iter().zip(&theoretical).enumerate() {
                println!(
                    "{:<8} {:<24} {:>12.6} {:>12.6}",
                    combination_short_label(mask, probs.len()),
                    combination_label(mask, probs.len()),
                    f,
                    p
                );
            }
            println!("------------------------------------------------------------------");
            println!("Per-event marginal frequencies:");
            for (i, (&m, &p)) in marginals.iter().zip(&probs).enumerate() {
                println!("  A{:<3} empirical {:>10.6}  expected {:>10.6}", i + 1, m, p);
            }
        }
    }

    info!("Combinations run complete");
    Ok(())
}
