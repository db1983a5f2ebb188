//! Conditional command implementation
//!
//! Samples the conditional two-event partition and compares the four
//! category frequencies against the derived joint probabilities.

use serde::Serialize;
use tracing::info;

use prob_core::theoretical::conditional_probabilities;
use prob_engine::freq::conditional_frequencies;
use prob_engine::sample::{conditional_pair_sample, generate_batch, ConditionalOutcome};

use super::{check_format, clamp_probability, make_rng, trial_config};
use crate::Result;

/// JSON-serialisable report of one conditional run.
#[derive(Serialize)]
struct ConditionalReport {
    p_a: f64,
    p_b_given_a: f64,
    trials: usize,
    seed: u64,
    categories: Vec<CategoryRow>,
}

#[derive(Serialize)]
struct CategoryRow {
    label: &'static str,
    empirical: f64,
    theoretical: f64,
}

/// Run the conditional command
pub fn run(p_a: f64, p_b_given_a: f64, trials: usize, seed: Option<u64>, format: &str) -> Result<()> {
    check_format(format)?;
    let p_a = clamp_probability(p_a);
    let p_b_given_a = clamp_probability(p_b_given_a);
    let config = trial_config(trials, seed)?;

    info!("Sampling conditional partition...");
    info!("  P(A): {}", p_a);
    info!("  P(B|A): {}", p_b_given_a);
    info!("  Trials: {}", config.n_trials());

    let mut rng = make_rng(&config);
    let used_seed = rng.seed();
    let outcomes = generate_batch(&mut rng, config.n_trials(), |rng| {
        conditional_pair_sample(rng, p_a, p_b_given_a)
    });

    let empirical = conditional_frequencies(&outcomes);
    let theoretical = conditional_probabilities(p_a, p_b_given_a);

    match format {
        "json" => {
            let categories = ConditionalOutcome::ALL
                .iter()
                .map(|outcome| CategoryRow {
                    label: outcome.label(),
                    empirical: empirical[outcome.index()],
                    theoretical: theoretical[outcome.index()],
                })
                .collect();
            let report = ConditionalReport {
                p_a,
                p_b_given_a,
                trials: config.n_trials(),
                seed: used_seed,
                categories,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!();
            println!(
                "Conditional partition, P(A)={}, P(B|A)={}, {} trials (seed {})",
                p_a,
                p_b_given_a,
                config.n_trials(),
                used_seed
            );
            println!("--------------------------------------------");
            println!("{:<8} {:>12} {:>12}", "", "Empirical", "Theoretical");
            println!("--------------------------------------------");
            for outcome in ConditionalOutcome::ALL {
                println!(
                    "{:<8} {:>12.6} {:>12.6}",
                    outcome.label(),
                    empirical[outcome.index()],
                    theoretical[outcome.index()]
                );
            }
            println!("--------------------------------------------");
        }
    }

    info!("Conditional run complete");
    Ok(())
}
