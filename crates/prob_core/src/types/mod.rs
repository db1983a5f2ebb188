//! Core record and error types.
//!
//! This module provides:
//! - `error`: Structured error types for distribution and donation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DistributionError`], [`WheelError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{DistributionError, WheelError};
