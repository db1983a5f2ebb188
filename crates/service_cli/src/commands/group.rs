//! Group command implementation
//!
//! Samples a complete group of events. The distribution is validated
//! before generation starts; an invalid sum blocks the run with the
//! validator's message rather than failing one draw at a time.

use serde::Serialize;
use tracing::info;

use prob_core::types::DistributionError;
use prob_core::validate::validate_distribution;
use prob_engine::freq::category_frequencies;
use prob_engine::sample::{complete_group_sample, generate_batch};
use prob_engine::stats::chi_square_statistic;

use super::{check_format, make_rng, trial_config};
use crate::Result;

/// JSON-serialisable report of one complete-group run.
#[derive(Serialize)]
struct GroupReport {
    probabilities: Vec<f64>,
    trials: usize,
    seed: u64,
    empirical_frequencies: Vec<f64>,
    chi_square: f64,
}

/// Run the group command
pub fn run(probabilities: &[f64], trials: usize, seed: Option<u64>, format: &str) -> Result<()> {
    check_format(format)?;
    let config = trial_config(trials, seed)?;

    // Advisory validation up front; the CLI chooses to block on failure
    let report = validate_distribution(probabilities);
    if !report.is_valid {
        info!(
            "Validation failed: {}",
            report.message.as_deref().unwrap_or("invalid distribution")
        );
        return Err(DistributionError::InvalidDistribution { sum: report.sum }.into());
    }

    info!("Sampling complete group...");
    info!("  Categories: {}", probabilities.len());
    info!("  Trials: {}", config.n_trials());

    let mut rng = make_rng(&config);
    let used_seed = rng.seed();

    let outcomes: Vec<usize> = generate_batch(&mut rng, config.n_trials(), |rng| {
        complete_group_sample(rng, probabilities)
    })
    .into_iter()
    .collect::<std::result::Result<_, _>>()?;

    let empirical = category_frequencies(&outcomes, probabilities.len());

    let mut observed = vec![0usize; probabilities.len()];
    for &outcome in &outcomes {
        observed[outcome] += 1;
    }
    let chi_square = chi_square_statistic(&observed, probabilities)?;

    match format {
        "json" => {
            let report = GroupReport {
                probabilities: probabilities.to_vec(),
                trials: config.n_trials(),
                seed: used_seed,
                empirical_frequencies: empirical,
                chi_square,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!();
            println!(
                "Complete group of {} categories, {} trials (seed {})",
                probabilities.len(),
                config.n_trials(),
                used_seed
            );
            println!("------------------------------------------------");
            println!("{:<10} {:>12} {:>12}", "Category", "Empirical", "Theoretical");
            println!("------------------------------------------------");
            for (i, (&f, &p)) in empirical.iter().zip(probabilities).enumerate() {
                println!("{:<10} {:>12.6} {:>12.6}", i + 1, f, p);
            }
            println!("------------------------------------------------");
            println!("Chi-square statistic: {:.4}", chi_square);
        }
    }

    info!("Complete group run complete");
    Ok(())
}
