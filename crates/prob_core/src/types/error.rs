//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from malformed probability distributions
//! - `WheelError`: Errors from donation-log operations

use thiserror::Error;

/// Categorised distribution errors.
///
/// Raised when a supplied probability vector cannot be used for the
/// requested operation. Sampling over a complete group checks the sum
/// invariant up front and propagates `InvalidDistribution` synchronously;
/// nothing is retried internally.
///
/// # Examples
/// ```
/// use prob_core::types::DistributionError;
///
/// let err = DistributionError::InvalidDistribution { sum: 0.9 };
/// assert!(format!("{}", err).contains("0.9000"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Probability sum deviates from 1 beyond the accepted tolerance.
    #[error("probabilities do not form a complete group (sum {sum:.4} != 1)")]
    InvalidDistribution {
        /// The actual sum of the supplied probabilities.
        sum: f64,
    },

    /// Observed and expected category counts disagree.
    #[error("category count mismatch: got {got}, need {need}")]
    LengthMismatch {
        /// Number of categories provided.
        got: usize,
        /// Number of categories required.
        need: usize,
    },

    /// An expected probability of zero carries a nonzero observed count.
    #[error("expected probability is zero at index {index} but outcomes were observed there")]
    DegenerateExpected {
        /// Index of the degenerate category.
        index: usize,
    },
}

/// Donation-log errors.
///
/// # Examples
/// ```
/// use prob_core::types::WheelError;
///
/// let err = WheelError::NonPositiveAmount { amount: -5.0 };
/// assert!(format!("{}", err).contains("-5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Donation amount must be strictly positive and finite.
    #[error("donation amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: f64,
    },
}
