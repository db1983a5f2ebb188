//! Trial batch configuration.
//!
//! This module provides configuration types and builders for batch
//! generation runs.

use super::error::ConfigError;

/// Maximum number of trials allowed in one batch.
pub const MAX_TRIALS: usize = 100_000_000;

/// Batch configuration.
///
/// Immutable configuration specifying how many independent trials to run
/// and, optionally, the seed that makes the run reproducible. Use
/// [`TrialConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use prob_engine::sample::TrialConfig;
///
/// let config = TrialConfig::builder()
///     .n_trials(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 1_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct TrialConfig {
    /// Number of independent trials.
    n_trials: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl TrialConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> TrialConfigBuilder {
        TrialConfigBuilder::default()
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_trials` is 0 or greater than
    /// [`MAX_TRIALS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        Ok(())
    }
}

/// Builder for [`TrialConfig`].
///
/// Provides a fluent API for constructing batch configurations with
/// validation at build time.
#[derive(Clone, Debug, Default)]
pub struct TrialConfigBuilder {
    n_trials: Option<usize>,
    seed: Option<u64>,
}

impl TrialConfigBuilder {
    /// Sets the number of independent trials.
    ///
    /// # Arguments
    ///
    /// * `n_trials` - Trial count in [1, 100_000_000]
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_trials` is not set or invalid.
    pub fn build(self) -> Result<TrialConfig, ConfigError> {
        let n_trials = self.n_trials.ok_or(ConfigError::InvalidParameter {
            name: "n_trials",
            value: "must be specified".to_string(),
        })?;

        let config = TrialConfig {
            n_trials,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = TrialConfig::builder().n_trials(10_000).build().unwrap();
        assert_eq!(config.n_trials(), 10_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = TrialConfig::builder().n_trials(1000).seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = TrialConfig::builder().n_trials(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = TrialConfig::builder().n_trials(MAX_TRIALS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(_))));
    }

    #[test]
    fn test_config_missing_trials() {
        let result = TrialConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_trials",
                ..
            })
        ));
    }
}
