//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands clamp
//! user-entered probabilities to [0, 1] before calling into the engine
//! (the engine itself treats out-of-range input as a caller contract
//! violation).

pub mod combinations;
pub mod conditional;
pub mod group;
pub mod single;
pub mod wheel;

use prob_engine::rng::SamplerRng;
use prob_engine::sample::TrialConfig;

use crate::{CliError, Result};

/// Clamps a user-entered probability to [0, 1].
pub(crate) fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Builds a validated trial configuration from CLI arguments.
pub(crate) fn trial_config(trials: usize, seed: Option<u64>) -> Result<TrialConfig> {
    let mut builder = TrialConfig::builder().n_trials(trials);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

/// Creates the RNG for a run: seeded when requested, OS entropy otherwise.
pub(crate) fn make_rng(config: &TrialConfig) -> SamplerRng {
    match config.seed() {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    }
}

/// Rejects output formats other than `table` and `json`.
pub(crate) fn check_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" => Ok(()),
        other => Err(CliError::InvalidArgument(format!(
            "unknown format: {}. Supported: json, table",
            other
        ))),
    }
}
