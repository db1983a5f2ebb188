//! Wheel command implementation
//!
//! Builds a donation log from the command line, aggregates weights per
//! category, and spins the lottery wheel many times to compare each
//! category's empirical win frequency against its weight share.

use serde::Serialize;
use tracing::info;

use prob_core::wheel::{add_donation, aggregate_weights_by_category, total_donations, Donation};
use prob_engine::freq::category_frequencies;
use prob_engine::sample::{generate_batch, weighted_draw_sample};

use super::{check_format, make_rng, trial_config};
use crate::{CliError, Result};

/// JSON-serialisable report of one wheel run.
#[derive(Serialize)]
struct WheelReport {
    total_donated: f64,
    spins: usize,
    seed: u64,
    categories: Vec<WheelRow>,
}

#[derive(Serialize)]
struct WheelRow {
    category: String,
    total_weight: f64,
    weight_share: f64,
    empirical_frequency: f64,
}

/// Parses a `label:amount` donation argument.
fn parse_donation(spec: &str) -> Result<(String, f64)> {
    let (label, amount) = spec.rsplit_once(':').ok_or_else(|| {
        CliError::InvalidArgument(format!("donation '{}' is not label:amount", spec))
    })?;
    let amount: f64 = amount.parse().map_err(|_| {
        CliError::InvalidArgument(format!("donation amount '{}' is not a number", amount))
    })?;
    Ok((label.to_string(), amount))
}

/// Run the wheel command
pub fn run(donations: &[String], spins: usize, seed: Option<u64>, format: &str) -> Result<()> {
    check_format(format)?;
    let config = trial_config(spins, seed)?;

    let mut log: Vec<Donation> = Vec::new();
    for spec in donations {
        let (label, amount) = parse_donation(spec)?;
        log = add_donation(&log, label, amount)?;
    }

    let categories = aggregate_weights_by_category(&log);
    let total = total_donations(&log);
    let weights: Vec<f64> = categories.iter().map(|c| c.total_weight).collect();

    info!("Spinning wheel...");
    info!("  Categories: {}", categories.len());
    info!("  Total donated: {}", total);
    info!("  Spins: {}", config.n_trials());

    let mut rng = make_rng(&config);
    let used_seed = rng.seed();

    let outcomes: Vec<usize> = match generate_batch(&mut rng, config.n_trials(), |rng| {
        weighted_draw_sample(rng, &weights)
    })
    .into_iter()
    .collect::<Option<_>>()
    {
        Some(outcomes) => outcomes,
        None => {
            // No categories or zero total weight: a routine state, not an error
            println!("No draw possible: the wheel has no positive weights");
            return Ok(());
        }
    };

    let empirical = category_frequencies(&outcomes, categories.len());

    match format {
        "json" => {
            let rows = categories
                .iter()
                .zip(&empirical)
                .map(|(c, &f)| WheelRow {
                    category: c.category.clone(),
                    total_weight: c.total_weight,
                    weight_share: c.total_weight / total,
                    empirical_frequency: f,
                })
                .collect();
            let report = WheelReport {
                total_donated: total,
                spins: config.n_trials(),
                seed: used_seed,
                categories: rows,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!();
            println!(
                "Lottery wheel, {} donated across {} categories, {} spins (seed {})",
                total,
                categories.len(),
                config.n_trials(),
                used_seed
            );
            println!("----------------------------------------------------------------");
            println!(
                "{:<16} {:>10} {:>12} {:>12}",
                "Category", "Donated", "Share", "Empirical"
            );
            println!("----------------------------------------------------------------");
            for (c, &f) in categories.iter().zip(&empirical) {
                println!(
                    "{:<16} {:>10.2} {:>12.6} {:>12.6}",
                    c.category,
                    c.total_weight,
                    c.total_weight / total,
                    f
                );
            }
            println!("----------------------------------------------------------------");
        }
    }

    info!("Wheel run complete");
    Ok(())
}
