//! Donation log and weighted-category aggregation for the lottery wheel.
//!
//! Donations accumulate per category label; the accumulated totals are the
//! weights a wheel draw selects against. The log is append/remove only and
//! every mutation returns a fresh collection, so a reader holding the
//! previous log never observes a partially-updated list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::WheelError;

/// A single donation towards a category.
///
/// # Examples
///
/// ```rust
/// use prob_core::wheel::add_donation;
///
/// let log = add_donation(&[], "chess", 150.0).unwrap();
/// assert_eq!(log.len(), 1);
/// assert_eq!(log[0].category, "chess");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Category label the donation counts towards.
    pub category: String,
    /// Donated amount, strictly positive.
    pub amount: f64,
    /// Time the donation was recorded.
    pub timestamp: DateTime<Utc>,
}

/// A category with its aggregated donation total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedCategory {
    /// Category label.
    pub category: String,
    /// Sum of all donation amounts for this label.
    pub total_weight: f64,
}

/// Appends a donation to the log, returning the extended log.
///
/// The input log is left untouched. The entry is stamped with the current
/// UTC time.
///
/// # Errors
///
/// Returns [`WheelError::NonPositiveAmount`] when `amount` is zero,
/// negative, or not finite.
pub fn add_donation(
    log: &[Donation],
    category: impl Into<String>,
    amount: f64,
) -> Result<Vec<Donation>, WheelError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(WheelError::NonPositiveAmount { amount });
    }

    let mut extended = log.to_vec();
    extended.push(Donation {
        category: category.into(),
        amount,
        timestamp: Utc::now(),
    });
    Ok(extended)
}

/// Removes the donation at `index`, returning the shortened log.
///
/// An out-of-range index returns the log unchanged. The input log is left
/// untouched either way.
pub fn remove_donation(log: &[Donation], index: usize) -> Vec<Donation> {
    let mut remaining = log.to_vec();
    if index < remaining.len() {
        remaining.remove(index);
    }
    remaining
}

/// Aggregates donation amounts per distinct category label.
///
/// Returns one [`WeightedCategory`] per label, sorted by descending total
/// weight; equal weights are ordered by label so the output is
/// deterministic.
///
/// # Examples
///
/// ```rust
/// use prob_core::wheel::{add_donation, aggregate_weights_by_category};
///
/// let log = add_donation(&[], "chess", 100.0).unwrap();
/// let log = add_donation(&log, "poker", 300.0).unwrap();
/// let log = add_donation(&log, "chess", 50.0).unwrap();
///
/// let categories = aggregate_weights_by_category(&log);
/// assert_eq!(categories[0].category, "poker");
/// assert!((categories[1].total_weight - 150.0).abs() < 1e-12);
/// ```
pub fn aggregate_weights_by_category(log: &[Donation]) -> Vec<WeightedCategory> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for donation in log {
        *totals.entry(donation.category.as_str()).or_insert(0.0) += donation.amount;
    }

    let mut categories: Vec<WeightedCategory> = totals
        .into_iter()
        .map(|(category, total_weight)| WeightedCategory {
            category: category.to_string(),
            total_weight,
        })
        .collect();

    categories.sort_by(|a, b| {
        b.total_weight
            .partial_cmp(&a.total_weight)
            .expect("donation totals are finite")
            .then_with(|| a.category.cmp(&b.category))
    });

    categories
}

/// Sum of all donation amounts in the log.
pub fn total_donations(log: &[Donation]) -> f64 {
    log.iter().map(|donation| donation.amount).sum()
}
