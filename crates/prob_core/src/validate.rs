//! Complete-group validation for probability vectors.
//!
//! A set of category probabilities forms a complete group when the
//! categories are mutually exclusive, exhaustive, and their probabilities
//! sum to 1. The check here is advisory: callers decide whether to block
//! generation, normalise, or abort. The input is never mutated.

use serde::{Deserialize, Serialize};

/// Absolute tolerance applied to the sum-to-one invariant.
pub const SUM_TOLERANCE: f64 = 1e-4;

/// Outcome of validating a probability vector against the complete-group
/// invariant.
///
/// # Examples
///
/// ```rust
/// use prob_core::validate::validate_distribution;
///
/// let report = validate_distribution(&[0.2, 0.3, 0.4]);
/// assert!(!report.is_valid);
/// assert!((report.sum - 0.9).abs() < 1e-12);
/// assert!(report.message.unwrap().contains("0.9000"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the sum lies within [`SUM_TOLERANCE`] of 1.
    pub is_valid: bool,
    /// The actual sum of the supplied probabilities.
    pub sum: f64,
    /// Human-readable failure description; `None` when valid.
    pub message: Option<String>,
}

/// Validates that `probs` forms a complete group.
///
/// Computes the sum of all entries and compares it against 1 with an
/// absolute tolerance of [`SUM_TOLERANCE`]. On failure the report's
/// message states the actual sum to four decimal places.
///
/// Entries are expected to lie in [0, 1]; values outside that range are a
/// caller contract violation and are not detected here.
///
/// # Examples
///
/// ```rust
/// use prob_core::validate::validate_distribution;
///
/// let report = validate_distribution(&[0.2, 0.3, 0.5]);
/// assert!(report.is_valid);
/// assert!((report.sum - 1.0).abs() < 1e-12);
/// assert!(report.message.is_none());
/// ```
pub fn validate_distribution(probs: &[f64]) -> ValidationReport {
    let sum: f64 = probs.iter().sum();
    let is_valid = (sum - 1.0).abs() < SUM_TOLERANCE;

    ValidationReport {
        is_valid,
        sum,
        message: if is_valid {
            None
        } else {
            Some(format!("probability sum ({:.4}) is not equal to 1", sum))
        },
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn report_sum_matches_input(
            probs in proptest::collection::vec(0.0_f64..1.0, 0..16),
        ) {
            let report = validate_distribution(&probs);
            let expected: f64 = probs.iter().sum();
            prop_assert!((report.sum - expected).abs() < 1e-12);
        }

        #[test]
        fn validity_agrees_with_tolerance(
            probs in proptest::collection::vec(0.0_f64..1.0, 0..16),
        ) {
            let report = validate_distribution(&probs);
            prop_assert_eq!(report.is_valid, (report.sum - 1.0).abs() < SUM_TOLERANCE);
            prop_assert_eq!(report.is_valid, report.message.is_none());
        }
    }
}
