//! Summary statistics and goodness-of-fit over outcome sequences.
//!
//! Beyond raw frequency tables, a batch is usually reported through its
//! sample moments (with a confidence band around the mean) and, when an
//! expected distribution is available, a chi-square goodness-of-fit
//! statistic comparing observed counts against it.

use serde::{Deserialize, Serialize};

use prob_core::types::DistributionError;

use crate::freq::success_frequency;

/// Sample moments of a batch.
///
/// Contains the sample mean, the unbiased sample variance, and the
/// standard error of the mean.
///
/// # Examples
///
/// ```rust
/// use prob_engine::stats::summarize;
///
/// let summary = summarize(&[1.0, 2.0, 3.0, 4.0]);
/// assert!((summary.mean - 2.5).abs() < 1e-12);
/// println!("mean: {} +/- {}", summary.mean, summary.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample variance (n - 1 denominator; 0 for n < 2).
    pub variance: f64,
    /// Standard error of the mean.
    pub std_error: f64,
}

impl SampleSummary {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Computes the sample moments of a value sequence.
///
/// An empty sequence yields the all-zero summary; a single observation
/// has zero variance and standard error.
pub fn summarize(values: &[f64]) -> SampleSummary {
    let n = values.len();
    if n == 0 {
        return SampleSummary::default();
    }

    let sum: f64 = values.iter().sum();
    let mean = sum / n as f64;

    if n < 2 {
        return SampleSummary {
            mean,
            variance: 0.0,
            std_error: 0.0,
        };
    }

    let variance: f64 =
        values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_error = (variance / n as f64).sqrt();

    SampleSummary {
        mean,
        variance,
        std_error,
    }
}

/// Empirical mean of a Bernoulli outcome sequence.
///
/// The estimator of p behind the law-of-large-numbers checks; identical
/// to [`success_frequency`](crate::freq::success_frequency).
#[inline]
pub fn bernoulli_mean(outcomes: &[bool]) -> f64 {
    success_frequency(outcomes)
}

/// Chi-square goodness-of-fit statistic.
///
/// Compares observed category counts against an expected probability
/// vector: Σᵢ (Oᵢ − Eᵢ)² / Eᵢ with Eᵢ = N·pᵢ and N = ΣOᵢ. Categories
/// with zero expected probability contribute nothing as long as nothing
/// was observed there.
///
/// # Errors
///
/// - [`DistributionError::LengthMismatch`] when the two vectors disagree
///   in length.
/// - [`DistributionError::DegenerateExpected`] when a category with zero
///   (or negative) expected probability has a nonzero observed count.
///
/// # Examples
///
/// ```rust
/// use prob_engine::stats::chi_square_statistic;
///
/// // Perfect agreement gives a statistic of 0
/// let chi2 = chi_square_statistic(&[20, 30, 50], &[0.2, 0.3, 0.5]).unwrap();
/// assert!(chi2.abs() < 1e-12);
/// ```
pub fn chi_square_statistic(
    observed: &[usize],
    expected_probs: &[f64],
) -> Result<f64, DistributionError> {
    if observed.len() != expected_probs.len() {
        return Err(DistributionError::LengthMismatch {
            got: observed.len(),
            need: expected_probs.len(),
        });
    }

    let n: usize = observed.iter().sum();
    let mut statistic = 0.0;

    for (index, (&count, &p)) in observed.iter().zip(expected_probs).enumerate() {
        let expected = p * n as f64;
        if expected <= 0.0 {
            if count > 0 {
                return Err(DistributionError::DegenerateExpected { index });
            }
            continue;
        }
        let deviation = count as f64 - expected;
        statistic += deviation * deviation / expected;
    }

    Ok(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summarize_basic() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(summary.mean, 2.5);
        // Unbiased variance of 1..4 is 5/3
        assert_relative_eq!(summary.variance, 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            summary.std_error,
            (5.0 / 3.0 / 4.0_f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), SampleSummary::default());
    }

    #[test]
    fn test_summarize_single_observation() {
        let summary = summarize(&[7.5]);
        assert_relative_eq!(summary.mean, 7.5);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_error, 0.0);
    }

    #[test]
    fn test_confidence_half_widths() {
        let summary = SampleSummary {
            mean: 0.0,
            variance: 1.0,
            std_error: 0.1,
        };
        assert_relative_eq!(summary.confidence_95(), 0.196);
        assert_relative_eq!(summary.confidence_99(), 0.2576);
    }

    #[test]
    fn test_bernoulli_mean() {
        assert_relative_eq!(bernoulli_mean(&[true, false, true, false]), 0.5);
    }

    #[test]
    fn test_chi_square_perfect_fit() {
        let chi2 = chi_square_statistic(&[20, 30, 50], &[0.2, 0.3, 0.5]).unwrap();
        assert_relative_eq!(chi2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chi_square_known_value() {
        // N = 100, expected [50, 50], observed [60, 40]
        // chi2 = (10^2)/50 + (10^2)/50 = 4
        let chi2 = chi_square_statistic(&[60, 40], &[0.5, 0.5]).unwrap();
        assert_relative_eq!(chi2, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chi_square_length_mismatch() {
        assert_eq!(
            chi_square_statistic(&[1, 2], &[0.5, 0.3, 0.2]),
            Err(DistributionError::LengthMismatch { got: 2, need: 3 })
        );
    }

    #[test]
    fn test_chi_square_degenerate_expected() {
        assert_eq!(
            chi_square_statistic(&[5, 5], &[1.0, 0.0]),
            Err(DistributionError::DegenerateExpected { index: 1 })
        );
    }

    #[test]
    fn test_chi_square_zero_expected_zero_observed() {
        let chi2 = chi_square_statistic(&[10, 0], &[1.0, 0.0]).unwrap();
        assert_relative_eq!(chi2, 0.0, epsilon = 1e-12);
    }
}
