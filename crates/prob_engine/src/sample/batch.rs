//! Batch generation of independent trials.
//!
//! A batch repeats a sampler N independent times and collects the outcome
//! sequence. There is no memoisation and no deduplication; every trial is
//! a fresh draw. The sequential path keeps one RNG stream; the parallel
//! path splits the trial space into fixed chunks, each with its own
//! deterministic substream, so results do not depend on thread scheduling.

use rayon::prelude::*;

use crate::rng::SamplerRng;

/// Trials per parallel chunk.
///
/// Large enough to amortise task dispatch, small enough that rayon can
/// balance uneven progress across the pool.
const TRIALS_PER_CHUNK: usize = 65_536;

/// Generates an outcome sequence of `n` independent trials.
///
/// Invokes `sampler` exactly `n` times against the supplied RNG. `n = 0`
/// yields an empty sequence without invoking the sampler at all.
///
/// # Examples
///
/// ```rust
/// use prob_engine::rng::SamplerRng;
/// use prob_engine::sample::{bernoulli_sample, generate_batch};
///
/// let mut rng = SamplerRng::from_seed(42);
/// let outcomes = generate_batch(&mut rng, 1000, |rng| bernoulli_sample(rng, 0.5));
/// assert_eq!(outcomes.len(), 1000);
/// ```
pub fn generate_batch<T, F>(rng: &mut SamplerRng, n: usize, mut sampler: F) -> Vec<T>
where
    F: FnMut(&mut SamplerRng) -> T,
{
    let mut outcomes = Vec::with_capacity(n);
    for _ in 0..n {
        outcomes.push(sampler(rng));
    }
    outcomes
}

/// Generates an outcome sequence of `n` independent trials across the
/// rayon pool.
///
/// The trial space is split into fixed-size chunks; chunk `i` samples
/// from [`SamplerRng::substream`]`(seed, i)`. Chunk
/// boundaries and substream seeds are fixed by `(seed, n)` alone, so the
/// output is reproducible and independent of how rayon schedules the
/// chunks. The outcome distribution matches the sequential generator;
/// only the underlying RNG stream differs.
///
/// # Examples
///
/// ```rust
/// use prob_engine::sample::{bernoulli_sample, generate_batch_par};
///
/// let outcomes = generate_batch_par(42, 100_000, |rng| bernoulli_sample(rng, 0.5));
/// assert_eq!(outcomes.len(), 100_000);
/// ```
pub fn generate_batch_par<T, F>(seed: u64, n: usize, sampler: F) -> Vec<T>
where
    T: Send,
    F: Fn(&mut SamplerRng) -> T + Sync,
{
    let n_chunks = n.div_ceil(TRIALS_PER_CHUNK);

    let chunks: Vec<Vec<T>> = (0..n_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = SamplerRng::substream(seed, chunk as u64);
            let start = chunk * TRIALS_PER_CHUNK;
            let len = TRIALS_PER_CHUNK.min(n - start);

            let mut outcomes = Vec::with_capacity(len);
            for _ in 0..len {
                outcomes.push(sampler(&mut rng));
            }
            outcomes
        })
        .collect();

    chunks.into_iter().flatten().collect()
}
