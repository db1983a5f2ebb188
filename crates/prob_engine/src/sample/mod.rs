//! Event samplers and batch generation.
//!
//! This module maps probability-model parameters plus uniform draws from a
//! [`SamplerRng`](crate::rng::SamplerRng) to discrete outcomes:
//!
//! - [`bernoulli_sample`]: single event with success probability p
//! - [`independent_combination_sample`]: bitmask over k independent events
//! - [`conditional_pair_sample`]: four-way conditional partition
//! - [`complete_group_sample`]: categorical draw over a complete group
//! - [`weighted_draw_sample`]: lottery-wheel draw over raw weights
//!
//! Batch generation repeats a sampler N independent times, either
//! sequentially ([`generate_batch`]) or across a rayon pool
//! ([`generate_batch_par`]). Trial counts and seeds travel in a validated
//! [`TrialConfig`].

pub mod batch;

mod config;
mod error;
mod samplers;

// Re-export commonly used items at module level
pub use batch::{generate_batch, generate_batch_par};
pub use config::{TrialConfig, TrialConfigBuilder, MAX_TRIALS};
pub use error::ConfigError;
pub use samplers::{
    bernoulli_sample, complete_group_sample, conditional_pair_sample,
    independent_combination_sample, weighted_draw_sample, ConditionalOutcome,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;

    // Cross-model smoke check: every sampler drives the same batch loop
    #[test]
    fn test_all_samplers_through_batch() {
        let mut rng = SamplerRng::from_seed(1);

        let bools = generate_batch(&mut rng, 100, |rng| bernoulli_sample(rng, 0.5));
        assert_eq!(bools.len(), 100);

        let masks = generate_batch(&mut rng, 100, |rng| {
            independent_combination_sample(rng, &[0.5, 0.5])
        });
        assert!(masks.iter().all(|&m| m < 4));

        let outcomes = generate_batch(&mut rng, 100, |rng| {
            conditional_pair_sample(rng, 0.6, 0.7)
        });
        assert!(outcomes.iter().all(|o| o.index() < 4));
    }
}
