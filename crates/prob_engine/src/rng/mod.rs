//! Random number generation for the sampling engine.
//!
//! All samplers draw from [`SamplerRng`], a seeded PRNG wrapper. Keeping
//! the generator an explicit argument (instead of an ambient global source)
//! makes every batch reproducible from its seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use prob_engine::rng::SamplerRng;
//!
//! // Create a seeded RNG for reproducible experiments
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! // Generate uniform random values in [0, 1)
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;

// Public re-exports
pub use prng::SamplerRng;
