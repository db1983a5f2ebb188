//! Pseudo-random number generator wrapper for discrete-event sampling.
//!
//! This module provides [`SamplerRng`], a seeded PRNG wrapper that offers
//! reproducible uniform generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling engine random number generator.
///
/// Provides seeded, reproducible uniform random number generation over
/// [0, 1), the only primitive the discrete event samplers need.
///
/// Cryptographic quality is not a goal here; `StdRng` is used for its
/// statistical quality and cheap seeding.
///
/// # Examples
///
/// ```rust
/// use prob_engine::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
///
/// // Single value generation
/// let u = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// ```
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SamplerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of random numbers,
    /// enabling reproducible experiments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prob_engine::rng::SamplerRng;
    ///
    /// let mut rng1 = SamplerRng::from_seed(12345);
    /// let mut rng2 = SamplerRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG instance from a random operating-system seed.
    ///
    /// The drawn seed is retained and can be read back through
    /// [`seed`](Self::seed), so even an unseeded run can be reproduced
    /// afterwards.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and for reproducing a batch after the fact.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent generator for a numbered substream.
    ///
    /// The parallel batch generator gives every chunk of the trial space
    /// its own substream so the result is independent of thread
    /// scheduling. The derivation mixes the stream index with an odd
    /// 64-bit constant, keeping distinct streams from colliding on nearby
    /// seeds.
    #[inline]
    pub fn substream(seed: u64, stream: u64) -> Self {
        Self::from_seed(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Generates a single uniform random value in [0, 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prob_engine::rng::SamplerRng;
    ///
    /// let mut rng = SamplerRng::from_seed(42);
    /// let value = rng.gen_uniform();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// This is a zero-allocation operation; the buffer must be
    /// pre-allocated by the caller. Empty buffers are handled gracefully
    /// (no operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prob_engine::rng::SamplerRng;
    ///
    /// let mut rng = SamplerRng::from_seed(42);
    /// let mut buffer = vec![0.0; 1000];
    /// rng.fill_uniform(&mut buffer);
    ///
    /// for &value in &buffer {
    ///     assert!(value >= 0.0 && value < 1.0);
    /// }
    /// ```
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}
