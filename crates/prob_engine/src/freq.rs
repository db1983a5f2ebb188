//! Frequency reducers over outcome sequences.
//!
//! A frequency table holds one empirical probability (count / N) per
//! declared category, indexed exactly like the matching theoretical
//! distribution. Categories that were never observed still appear, with
//! frequency 0; the table's length is fixed by the declared category
//! space, not by what happened to be drawn.

use crate::sample::ConditionalOutcome;

/// Empirical success frequency of a Bernoulli outcome sequence.
///
/// Fraction of `true` outcomes; 0 for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use prob_engine::freq::success_frequency;
///
/// let outcomes = [true, false, true, true];
/// assert!((success_frequency(&outcomes) - 0.75).abs() < 1e-12);
/// assert_eq!(success_frequency(&[]), 0.0);
/// ```
pub fn success_frequency(outcomes: &[bool]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let successes = outcomes.iter().filter(|&&outcome| outcome).count();
    successes as f64 / outcomes.len() as f64
}

/// Empirical frequency of every category in a declared category space.
///
/// Returns `category_count` entries, one per category index, each the
/// observed count divided by the sequence length. Out-of-range outcomes
/// are ignored rather than counted. An empty sequence yields an all-zero
/// table of the declared length.
///
/// # Examples
///
/// ```rust
/// use prob_engine::freq::category_frequencies;
///
/// let outcomes = [0, 2, 2, 1];
/// let table = category_frequencies(&outcomes, 4);
/// assert_eq!(table.len(), 4);
/// assert!((table[2] - 0.5).abs() < 1e-12);
/// assert_eq!(table[3], 0.0);
/// ```
pub fn category_frequencies(outcomes: &[usize], category_count: usize) -> Vec<f64> {
    let mut counts = vec![0usize; category_count];
    for &outcome in outcomes {
        if outcome < category_count {
            counts[outcome] += 1;
        }
    }

    if outcomes.is_empty() {
        return vec![0.0; category_count];
    }

    let n = outcomes.len() as f64;
    counts.into_iter().map(|count| count as f64 / n).collect()
}

/// Empirical frequency of every combination of k independent events.
///
/// The category space is always `2^k` regardless of how many combinations
/// were actually observed.
pub fn combination_frequencies(masks: &[usize], event_count: usize) -> Vec<f64> {
    category_frequencies(masks, 1usize << event_count)
}

/// Empirical frequency of the four conditional-partition categories.
///
/// Indexed [A∧B, A∧¬B, ¬A∧B, ¬A∧¬B], matching
/// [`conditional_probabilities`](prob_core::theoretical::conditional_probabilities).
pub fn conditional_frequencies(outcomes: &[ConditionalOutcome]) -> [f64; 4] {
    let mut counts = [0usize; 4];
    for outcome in outcomes {
        counts[outcome.index()] += 1;
    }

    if outcomes.is_empty() {
        return [0.0; 4];
    }

    let n = outcomes.len() as f64;
    counts.map(|count| count as f64 / n)
}

/// Per-event marginal frequencies over combination masks.
///
/// Entry i is the fraction of trials in which event i occurred (bit i
/// set), independently of the other events. For independent events each
/// marginal converges to that event's own probability.
///
/// # Examples
///
/// ```rust
/// use prob_engine::freq::marginal_event_frequencies;
///
/// // Event 0 occurred in every trial, event 1 in half of them
/// let masks = [0b01, 0b11, 0b01, 0b11];
/// let marginals = marginal_event_frequencies(&masks, 2);
/// assert!((marginals[0] - 1.0).abs() < 1e-12);
/// assert!((marginals[1] - 0.5).abs() < 1e-12);
/// ```
pub fn marginal_event_frequencies(masks: &[usize], event_count: usize) -> Vec<f64> {
    let mut counts = vec![0usize; event_count];
    for &mask in masks {
        for (i, count) in counts.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *count += 1;
            }
        }
    }

    if masks.is_empty() {
        return vec![0.0; event_count];
    }

    let n = masks.len() as f64;
    counts.into_iter().map(|count| count as f64 / n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_success_frequency() {
        assert_relative_eq!(success_frequency(&[true, true, false, false]), 0.5);
        assert_relative_eq!(success_frequency(&[false]), 0.0);
        assert_relative_eq!(success_frequency(&[true]), 1.0);
    }

    #[test]
    fn test_success_frequency_empty() {
        assert_eq!(success_frequency(&[]), 0.0);
    }

    #[test]
    fn test_category_frequencies_counts() {
        let table = category_frequencies(&[0, 1, 1, 2, 1], 3);
        assert_relative_eq!(table[0], 0.2);
        assert_relative_eq!(table[1], 0.6);
        assert_relative_eq!(table[2], 0.2);
    }

    #[test]
    fn test_category_frequencies_include_unobserved() {
        let table = category_frequencies(&[0, 0, 0], 4);
        assert_eq!(table.len(), 4);
        assert_relative_eq!(table[0], 1.0);
        assert_eq!(table[1], 0.0);
        assert_eq!(table[2], 0.0);
        assert_eq!(table[3], 0.0);
    }

    #[test]
    fn test_category_frequencies_ignore_out_of_range() {
        let table = category_frequencies(&[0, 9, 9, 1], 2);
        assert_relative_eq!(table[0], 0.25);
        assert_relative_eq!(table[1], 0.25);
    }

    #[test]
    fn test_category_frequencies_empty_sequence() {
        let table = category_frequencies(&[], 3);
        assert_eq!(table, vec![0.0, 0.0, 0.0]);
        assert_eq!(table.iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_category_frequencies_sum_to_one() {
        let outcomes: Vec<usize> = (0..1000).map(|i| i % 7).collect();
        let table = category_frequencies(&outcomes, 7);
        assert_relative_eq!(table.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_combination_frequencies_full_space() {
        let masks = [0b00, 0b01, 0b01, 0b11];
        let table = combination_frequencies(&masks, 2);
        assert_eq!(table.len(), 4);
        assert_relative_eq!(table[0], 0.25);
        assert_relative_eq!(table[1], 0.5);
        assert_eq!(table[2], 0.0);
        assert_relative_eq!(table[3], 0.25);
    }

    #[test]
    fn test_conditional_frequencies() {
        use ConditionalOutcome::*;
        let outcomes = [BothOccur, BothOccur, AWithoutB, Neither];
        let table = conditional_frequencies(&outcomes);
        assert_relative_eq!(table[0], 0.5);
        assert_relative_eq!(table[1], 0.25);
        assert_eq!(table[2], 0.0);
        assert_relative_eq!(table[3], 0.25);
    }

    #[test]
    fn test_conditional_frequencies_empty() {
        assert_eq!(conditional_frequencies(&[]), [0.0; 4]);
    }

    #[test]
    fn test_marginal_event_frequencies() {
        let masks = [0b01, 0b11, 0b01, 0b11];
        let marginals = marginal_event_frequencies(&masks, 2);
        assert_relative_eq!(marginals[0], 1.0);
        assert_relative_eq!(marginals[1], 0.5);
    }

    #[test]
    fn test_marginal_event_frequencies_empty() {
        assert_eq!(marginal_event_frequencies(&[], 3), vec![0.0, 0.0, 0.0]);
    }
}
