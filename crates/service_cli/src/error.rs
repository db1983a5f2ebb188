//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed probability distribution.
    #[error("distribution error: {0}")]
    Distribution(#[from] prob_core::types::DistributionError),

    /// Donation-log operation failed.
    #[error("wheel error: {0}")]
    Wheel(#[from] prob_core::types::WheelError),

    /// Invalid batch configuration.
    #[error("configuration error: {0}")]
    Config(#[from] prob_engine::ConfigError),

    /// JSON output serialisation failed.
    #[error("serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
