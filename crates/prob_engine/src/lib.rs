//! # prob_engine: Sampling and Frequency-Estimation Engine
//!
//! ## Layer Role
//!
//! prob_engine sits on top of `prob_core` and owns everything random:
//! - Seeded random number generation (`rng`)
//! - Event samplers for the five supported probability models (`sample`)
//! - Batch generation, sequential and parallel (`sample::batch`)
//! - Frequency reduction of outcome sequences (`freq`)
//! - Summary statistics and goodness-of-fit (`stats`)
//!
//! The engine is stateless and re-entrant: a batch of N draws is one tight
//! loop over an injected RNG handle, with no shared mutable state between
//! iterations. Concurrent batches with different parameters may run in
//! parallel without coordination.
//!
//! ## Reproducibility
//!
//! Every sampler takes `&mut SamplerRng` rather than reaching for a global
//! random source, so a fixed seed reproduces a batch exactly.
//!
//! ## Usage Example
//!
//! ```rust
//! use prob_engine::rng::SamplerRng;
//! use prob_engine::sample::{bernoulli_sample, generate_batch};
//! use prob_engine::freq::success_frequency;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let outcomes = generate_batch(&mut rng, 10_000, |rng| bernoulli_sample(rng, 0.3));
//!
//! let frequency = success_frequency(&outcomes);
//! assert!((frequency - 0.3).abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod freq;
pub mod rng;
pub mod sample;
pub mod stats;

pub use rng::SamplerRng;
pub use sample::{ConditionalOutcome, ConfigError, TrialConfig};
