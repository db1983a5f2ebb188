//! Event samplers for the supported probability models.
//!
//! Each sampler is a pure function of its parameters and one or more
//! uniform draws from the supplied RNG. Probabilities are expected in
//! [0, 1]; clamping out-of-range input is the caller's responsibility and
//! is deliberately not performed here.

use prob_core::types::DistributionError;
use prob_core::validate::SUM_TOLERANCE;

use crate::rng::SamplerRng;

/// Outcome of one conditional two-event trial.
///
/// The four categories partition the outcome space in the fixed index
/// order used by frequency tables and theoretical distributions:
/// 0 = A∧B, 1 = A∧¬B, 2 = ¬A∧B, 3 = ¬A∧¬B.
///
/// # Examples
///
/// ```rust
/// use prob_engine::sample::ConditionalOutcome;
///
/// assert_eq!(ConditionalOutcome::BothOccur.index(), 0);
/// assert_eq!(ConditionalOutcome::from_index(3), Some(ConditionalOutcome::Neither));
/// assert_eq!(ConditionalOutcome::from_index(4), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionalOutcome {
    /// Both A and B occurred.
    BothOccur,
    /// A occurred, B did not.
    AWithoutB,
    /// B occurred, A did not.
    BWithoutA,
    /// Neither event occurred.
    Neither,
}

impl ConditionalOutcome {
    /// All four outcomes in category-index order.
    pub const ALL: [ConditionalOutcome; 4] = [
        ConditionalOutcome::BothOccur,
        ConditionalOutcome::AWithoutB,
        ConditionalOutcome::BWithoutA,
        ConditionalOutcome::Neither,
    ];

    /// Category index of this outcome, matching the ordering of
    /// [`conditional_probabilities`](prob_core::theoretical::conditional_probabilities).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ConditionalOutcome::BothOccur => 0,
            ConditionalOutcome::AWithoutB => 1,
            ConditionalOutcome::BWithoutA => 2,
            ConditionalOutcome::Neither => 3,
        }
    }

    /// Outcome for a category index, `None` when out of range.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short textual label of the category.
    pub fn label(self) -> &'static str {
        match self {
            ConditionalOutcome::BothOccur => "AB",
            ConditionalOutcome::AWithoutB => "A~B",
            ConditionalOutcome::BWithoutA => "~AB",
            ConditionalOutcome::Neither => "~A~B",
        }
    }
}

/// Samples a single Bernoulli event with success probability `p`.
///
/// Draws u ~ U[0, 1) and reports success when u < p, so p = 0 never
/// succeeds and p = 1 always does.
///
/// # Examples
///
/// ```rust
/// use prob_engine::rng::SamplerRng;
/// use prob_engine::sample::bernoulli_sample;
///
/// let mut rng = SamplerRng::from_seed(42);
/// assert!(!bernoulli_sample(&mut rng, 0.0));
/// assert!(bernoulli_sample(&mut rng, 1.0));
/// ```
#[inline]
pub fn bernoulli_sample(rng: &mut SamplerRng, p: f64) -> bool {
    rng.gen_uniform() < p
}

/// Samples one combination of k independent events.
///
/// Each event draws its own uniform in index order and sets bit i
/// (weight 2^i) of the returned mask on success. The per-event draws are
/// independent; the draw order affects only the underlying RNG stream,
/// not the output distribution.
///
/// # Examples
///
/// ```rust
/// use prob_engine::rng::SamplerRng;
/// use prob_engine::sample::independent_combination_sample;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let mask = independent_combination_sample(&mut rng, &[1.0, 0.0, 1.0]);
/// assert_eq!(mask, 0b101);
/// ```
pub fn independent_combination_sample(rng: &mut SamplerRng, probs: &[f64]) -> usize {
    let mut combination_index = 0usize;
    for (i, &p) in probs.iter().enumerate() {
        if rng.gen_uniform() < p {
            combination_index |= 1 << i;
        }
    }
    combination_index
}

/// Samples one outcome of the conditional two-event partition.
///
/// Derives the four joint probabilities from P(A) and P(B|A) with
/// P(B|¬A) = 1 − P(B|A), then tests a single uniform against the
/// successive cumulative thresholds in the fixed order
/// [A∧B, A∧¬B, ¬A∧B, ¬A∧¬B]. The final category is an unconditional
/// fallback: if upstream input error keeps the four probabilities from
/// summing to 1, the last category absorbs the remainder and the sampler
/// never fails.
pub fn conditional_pair_sample(
    rng: &mut SamplerRng,
    p_a: f64,
    p_b_given_a: f64,
) -> ConditionalOutcome {
    let u = rng.gen_uniform();

    let p_not_a = 1.0 - p_a;
    let p_b_given_not_a = 1.0 - p_b_given_a;

    let p_ab = p_a * p_b_given_a;
    let p_a_not_b = p_a * (1.0 - p_b_given_a);
    let p_not_a_b = p_not_a * p_b_given_not_a;

    if u < p_ab {
        return ConditionalOutcome::BothOccur;
    }
    if u < p_ab + p_a_not_b {
        return ConditionalOutcome::AWithoutB;
    }
    if u < p_ab + p_a_not_b + p_not_a_b {
        return ConditionalOutcome::BWithoutA;
    }
    ConditionalOutcome::Neither
}

/// Samples one category from a complete group of events.
///
/// The supplied probabilities must sum to 1 within [`SUM_TOLERANCE`];
/// otherwise the draw fails with
/// [`DistributionError::InvalidDistribution`] carrying the actual sum.
/// Callers wanting an advisory check first should use
/// [`validate_distribution`](prob_core::validate::validate_distribution).
///
/// A single uniform is tested against the cumulative sums in index order.
/// When floating-point rounding leaves the final cumulative sum just
/// below the drawn uniform, the last category is returned; that fallback
/// keeps the sampler total and must not be replaced with an error path.
///
/// # Errors
///
/// Returns [`DistributionError::InvalidDistribution`] when the sum
/// deviates from 1 beyond tolerance (an empty vector sums to 0 and is
/// therefore invalid).
pub fn complete_group_sample(
    rng: &mut SamplerRng,
    probs: &[f64],
) -> Result<usize, DistributionError> {
    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(DistributionError::InvalidDistribution { sum });
    }

    let u = rng.gen_uniform();
    let mut cumulative_probability = 0.0;

    for (i, &p) in probs.iter().enumerate() {
        cumulative_probability += p;
        if u < cumulative_probability {
            return Ok(i);
        }
    }

    // Floating-point shortfall: the cumulative sum ended just under 1
    Ok(probs.len() - 1)
}

/// Samples one category with probability proportional to its weight.
///
/// Weights need not be normalised; each cumulative weight is divided by
/// the total at comparison time. Returns `None` when the category set is
/// empty or the total weight is 0, the routine "no draw possible" state
/// (for instance, an empty donation log).
///
/// # Examples
///
/// ```rust
/// use prob_engine::rng::SamplerRng;
/// use prob_engine::sample::weighted_draw_sample;
///
/// let mut rng = SamplerRng::from_seed(42);
/// assert_eq!(weighted_draw_sample(&mut rng, &[]), None);
/// assert_eq!(weighted_draw_sample(&mut rng, &[0.0, 0.0]), None);
/// assert_eq!(weighted_draw_sample(&mut rng, &[0.0, 3.0]), Some(1));
/// ```
pub fn weighted_draw_sample(rng: &mut SamplerRng, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return None;
    }

    let u = rng.gen_uniform();
    let mut cumulative_probability = 0.0;

    for (i, &w) in weights.iter().enumerate() {
        cumulative_probability += w / total;
        if u < cumulative_probability {
            return Some(i);
        }
    }

    Some(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bernoulli_degenerate_probabilities() {
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..1000 {
            assert!(!bernoulli_sample(&mut rng, 0.0));
            assert!(bernoulli_sample(&mut rng, 1.0));
        }
    }

    #[test]
    fn test_combination_mask_range() {
        let mut rng = SamplerRng::from_seed(42);
        let probs = [0.3, 0.5, 0.7];
        for _ in 0..1000 {
            let mask = independent_combination_sample(&mut rng, &probs);
            assert!(mask < 8);
        }
    }

    #[test]
    fn test_combination_degenerate_events() {
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(independent_combination_sample(&mut rng, &[1.0, 0.0, 1.0]), 0b101);
            assert_eq!(independent_combination_sample(&mut rng, &[0.0, 0.0]), 0);
            assert_eq!(independent_combination_sample(&mut rng, &[1.0, 1.0]), 0b11);
        }
    }

    #[test]
    fn test_combination_empty_event_set() {
        let mut rng = SamplerRng::from_seed(42);
        assert_eq!(independent_combination_sample(&mut rng, &[]), 0);
    }

    #[test]
    fn test_conditional_outcome_round_trip() {
        for outcome in ConditionalOutcome::ALL {
            assert_eq!(ConditionalOutcome::from_index(outcome.index()), Some(outcome));
        }
        assert_eq!(ConditionalOutcome::from_index(4), None);
    }

    #[test]
    fn test_conditional_degenerate_all_a_and_b() {
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..1000 {
            assert_eq!(
                conditional_pair_sample(&mut rng, 1.0, 1.0),
                ConditionalOutcome::BothOccur
            );
        }
    }

    #[test]
    fn test_conditional_degenerate_never_a() {
        // pA = 0, pB|A = 1 forces pB|notA = 0, so every trial lands in ~A~B
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..1000 {
            assert_eq!(
                conditional_pair_sample(&mut rng, 0.0, 1.0),
                ConditionalOutcome::Neither
            );
        }
    }

    #[test]
    fn test_complete_group_invalid_sum() {
        let mut rng = SamplerRng::from_seed(42);
        match complete_group_sample(&mut rng, &[0.2, 0.3, 0.4]) {
            Err(DistributionError::InvalidDistribution { sum }) => {
                assert!((sum - 0.9).abs() < 1e-12);
            }
            other => panic!("expected InvalidDistribution, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_group_empty_is_invalid() {
        let mut rng = SamplerRng::from_seed(42);
        assert!(matches!(
            complete_group_sample(&mut rng, &[]),
            Err(DistributionError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn test_complete_group_valid_draws_in_range() {
        let mut rng = SamplerRng::from_seed(42);
        let probs = [0.2, 0.3, 0.5];
        for _ in 0..10_000 {
            let index = complete_group_sample(&mut rng, &probs).unwrap();
            assert!(index < 3);
        }
    }

    #[test]
    fn test_complete_group_certain_category() {
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(complete_group_sample(&mut rng, &[0.0, 1.0, 0.0]).unwrap(), 1);
        }
    }

    #[test]
    fn test_weighted_draw_empty_and_zero() {
        let mut rng = SamplerRng::from_seed(42);
        assert_eq!(weighted_draw_sample(&mut rng, &[]), None);
        assert_eq!(weighted_draw_sample(&mut rng, &[0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_weighted_draw_single_positive_weight() {
        let mut rng = SamplerRng::from_seed(42);
        for _ in 0..1000 {
            assert_eq!(weighted_draw_sample(&mut rng, &[0.0, 0.0, 7.5]), Some(2));
        }
    }

    #[test]
    fn test_weighted_draw_unnormalised_weights() {
        // Same relative weights, different scales, same seed: identical draws
        let mut rng1 = SamplerRng::from_seed(7);
        let mut rng2 = SamplerRng::from_seed(7);
        for _ in 0..1000 {
            let a = weighted_draw_sample(&mut rng1, &[1.0, 2.0, 3.0]);
            let b = weighted_draw_sample(&mut rng2, &[100.0, 200.0, 300.0]);
            assert_eq!(a, b);
        }
    }
}
