//! # prob_core: Foundation for Discrete-Probability Experiments
//!
//! ## Layer Role
//!
//! prob_core is the bottom layer of the workspace, providing everything that
//! is deterministic about a probability experiment:
//! - Distribution validation (`validate`)
//! - Closed-form theoretical probabilities and combination labels
//!   (`theoretical`)
//! - The donation log and weighted-category aggregation behind the lottery
//!   wheel (`wheel`)
//! - Structured error types (`types::error`)
//!
//! Sampling itself lives one layer up in `prob_engine`; nothing in this
//! crate draws a random number.
//!
//! ## Zero Dependency Principle
//!
//! prob_core has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation support for report and record types
//! - chrono: Donation timestamps
//!
//! ## Usage Examples
//!
//! ```rust
//! use prob_core::theoretical::{combination_probabilities, combination_short_label};
//! use prob_core::validate::validate_distribution;
//!
//! // Theoretical distribution over all combinations of two events
//! let probs = combination_probabilities(&[0.5, 0.5]);
//! assert_eq!(probs.len(), 4);
//! assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//!
//! // Mask rendering, most-significant event first
//! assert_eq!(combination_short_label(5, 3), "101");
//!
//! // Complete-group validation
//! let report = validate_distribution(&[0.2, 0.3, 0.5]);
//! assert!(report.is_valid);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod theoretical;
pub mod types;
pub mod validate;
pub mod wheel;
