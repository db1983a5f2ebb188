//! Closed-form probabilities for the supported event models.
//!
//! Everything here is pure and deterministic: calling a function twice with
//! identical inputs yields bit-identical outputs. These values are what the
//! empirical frequency tables produced by `prob_engine` are compared
//! against.
//!
//! # Combination indexing
//!
//! A set of k independent events maps onto 2^k combinations. Combination
//! `i` is read as a bitmask: bit j set means event j occurred. Labels can
//! be rendered in a long form (each event listed as included or excluded)
//! or a short form (a string of '1'/'0' characters, most-significant event
//! first).

/// Theoretical probability of every combination of k independent events.
///
/// Entry `i` is the probability of the combination whose bitmask is `i`:
/// the product over all event positions j of `probs[j]` when bit j is set
/// and `1 - probs[j]` otherwise. The returned vector always has exactly
/// `2^k` entries, one per combination, whether or not a combination is
/// ever observed empirically.
///
/// The full table is materialised for any k; bounding k to keep `2^k`
/// tractable is the caller's responsibility (k must be below the pointer
/// width in any case).
///
/// # Examples
///
/// ```rust
/// use prob_core::theoretical::combination_probabilities;
///
/// let probs = combination_probabilities(&[0.5, 0.4]);
/// assert_eq!(probs.len(), 4);
/// // Mask 0b01: first event occurred, second did not
/// assert!((probs[1] - 0.5 * 0.6).abs() < 1e-12);
/// assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn combination_probabilities(probs: &[f64]) -> Vec<f64> {
    let event_count = probs.len();
    let total_combinations = 1usize << event_count;
    let mut theoretical = vec![0.0; total_combinations];

    for (mask, entry) in theoretical.iter_mut().enumerate() {
        let mut combination_prob = 1.0;

        for (j, &prob) in probs.iter().enumerate() {
            let event_occurred = mask & (1 << j) != 0;
            combination_prob *= if event_occurred { prob } else { 1.0 - prob };
        }

        *entry = combination_prob;
    }

    theoretical
}

/// Theoretical joint probabilities of the conditional two-event partition.
///
/// Given P(A) and P(B|A), derives P(B|¬A) = 1 − P(B|A) and returns the
/// four joint probabilities in the fixed order
/// `[P(A∧B), P(A∧¬B), P(¬A∧B), P(¬A∧¬B)]`. For arguments in [0, 1] the
/// four values sum to exactly 1 by algebra.
///
/// # Examples
///
/// ```rust
/// use prob_core::theoretical::conditional_probabilities;
///
/// let joint = conditional_probabilities(0.6, 0.7);
/// assert!((joint[0] - 0.42).abs() < 1e-12);
/// assert!((joint[1] - 0.18).abs() < 1e-12);
/// assert!((joint[2] - 0.12).abs() < 1e-12);
/// assert!((joint[3] - 0.28).abs() < 1e-12);
/// ```
pub fn conditional_probabilities(p_a: f64, p_b_given_a: f64) -> [f64; 4] {
    let p_not_a = 1.0 - p_a;
    let p_b_given_not_a = 1.0 - p_b_given_a;

    [
        p_a * p_b_given_a,
        p_a * (1.0 - p_b_given_a),
        p_not_a * p_b_given_not_a,
        p_not_a * (1.0 - p_b_given_not_a),
    ]
}

/// Long-form label of a combination index.
///
/// Lists each of the k events in index order, rendered as `A1` when the
/// event occurred in this combination and `~A1` when it did not.
///
/// # Examples
///
/// ```rust
/// use prob_core::theoretical::combination_label;
///
/// assert_eq!(combination_label(5, 3), "A1, ~A2, A3");
/// assert_eq!(combination_label(0, 2), "~A1, ~A2");
/// ```
pub fn combination_label(combination_index: usize, event_count: usize) -> String {
    let mut events = Vec::with_capacity(event_count);
    for i in 0..event_count {
        let occurred = combination_index & (1 << i) != 0;
        if occurred {
            events.push(format!("A{}", i + 1));
        } else {
            events.push(format!("~A{}", i + 1));
        }
    }
    events.join(", ")
}

/// Short-form label of a combination index.
///
/// Renders the k-bit mask as a string of '1'/'0' characters ordered from
/// the highest-index event to the lowest, so the most-significant event
/// comes first.
///
/// # Examples
///
/// ```rust
/// use prob_core::theoretical::combination_short_label;
///
/// // Bit 2 set, bit 1 clear, bit 0 set
/// assert_eq!(combination_short_label(5, 3), "101");
/// ```
pub fn combination_short_label(combination_index: usize, event_count: usize) -> String {
    let mut bits = String::with_capacity(event_count);
    for i in (0..event_count).rev() {
        if combination_index & (1 << i) != 0 {
            bits.push('1');
        } else {
            bits.push('0');
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_combination_probabilities_two_events() {
        let theory = combination_probabilities(&[0.3, 0.6]);
        assert_eq!(theory.len(), 4);
        assert_relative_eq!(theory[0], 0.7 * 0.4, epsilon = 1e-12); // neither
        assert_relative_eq!(theory[1], 0.3 * 0.4, epsilon = 1e-12); // only A1
        assert_relative_eq!(theory[2], 0.7 * 0.6, epsilon = 1e-12); // only A2
        assert_relative_eq!(theory[3], 0.3 * 0.6, epsilon = 1e-12); // both
    }

    #[test]
    fn test_combination_probabilities_sum_to_one() {
        let theory = combination_probabilities(&[0.1, 0.5, 0.9, 0.33]);
        assert_eq!(theory.len(), 16);
        assert_relative_eq!(theory.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_combination_probabilities_empty_input() {
        // Zero events leave a single empty combination of probability 1
        let theory = combination_probabilities(&[]);
        assert_eq!(theory, vec![1.0]);
    }

    #[test]
    fn test_combination_probabilities_degenerate() {
        let theory = combination_probabilities(&[1.0, 0.0]);
        assert_relative_eq!(theory[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(theory[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(theory[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(theory[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_probabilities_reference_values() {
        let joint = conditional_probabilities(0.6, 0.7);
        assert_relative_eq!(joint[0], 0.42, epsilon = 1e-12);
        assert_relative_eq!(joint[1], 0.18, epsilon = 1e-12);
        assert_relative_eq!(joint[2], 0.12, epsilon = 1e-12);
        assert_relative_eq!(joint[3], 0.28, epsilon = 1e-12);
        assert_relative_eq!(joint.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_probabilities_degenerate_a() {
        let joint = conditional_probabilities(1.0, 0.5);
        assert_relative_eq!(joint[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(joint[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_idempotent_outputs() {
        let first = combination_probabilities(&[0.12, 0.34, 0.56]);
        let second = combination_probabilities(&[0.12, 0.34, 0.56]);
        assert_eq!(first, second);

        let a = conditional_probabilities(0.6, 0.7);
        let b = conditional_probabilities(0.6, 0.7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_combination_label_long_form() {
        assert_eq!(combination_label(0, 3), "~A1, ~A2, ~A3");
        assert_eq!(combination_label(7, 3), "A1, A2, A3");
        assert_eq!(combination_label(2, 3), "~A1, A2, ~A3");
    }

    #[test]
    fn test_combination_short_label_msb_first() {
        assert_eq!(combination_short_label(5, 3), "101");
        assert_eq!(combination_short_label(0, 3), "000");
        assert_eq!(combination_short_label(1, 3), "001");
        assert_eq!(combination_short_label(4, 3), "100");
    }

    #[test]
    fn test_combination_short_label_zero_events() {
        assert_eq!(combination_short_label(0, 0), "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn combination_table_shape_and_range(
            probs in proptest::collection::vec(0.0_f64..=1.0, 0..10),
        ) {
            let theory = combination_probabilities(&probs);
            prop_assert_eq!(theory.len(), 1usize << probs.len());
            for &p in &theory {
                prop_assert!((0.0..=1.0).contains(&p));
            }
            prop_assert!((theory.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn conditional_partition_sums_to_one(
            p_a in 0.0_f64..=1.0,
            p_b_given_a in 0.0_f64..=1.0,
        ) {
            let joint = conditional_probabilities(p_a, p_b_given_a);
            prop_assert!((joint.iter().sum::<f64>() - 1.0).abs() < 1e-12);
            for &p in &joint {
                prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p));
            }
        }

        #[test]
        fn short_label_round_trips_mask(
            event_count in 0usize..12,
            raw in proptest::num::usize::ANY,
        ) {
            let mask = if event_count == 0 { 0 } else { raw % (1usize << event_count) };
            let label = combination_short_label(mask, event_count);
            prop_assert_eq!(label.len(), event_count);
            let decoded = label.chars().fold(0usize, |acc, c| {
                (acc << 1) | usize::from(c == '1')
            });
            prop_assert_eq!(decoded, mask);
        }
    }
}
