//! Hyperparameters for [`LinearRegressor`](crate::model::linear::LinearRegressor).
//!
//! A [`LinearConfig`] is built fluently and validated once in
//! [`LinearConfigBuilder::build`]. With the `serde` feature the config can also
//! be read from JSON; missing fields fall back to the defaults below.
//!
//! Defaults:
//! - `learning_rate`: 0.01
//! - `max_epochs`: 1000
//! - `batch_size`: 32
//! - `l2`: 0.0
//! - `tolerance`: 1e-6
//! - `verbose`: false

use crate::error::{ModelError, Result};

/// Training hyperparameters of a linear model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearConfig {
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub batch_size: usize,
    /// L2 penalty strength (`l2 * ||w||^2`); the bias is not penalized.
    pub l2: f64,
    /// Early-stop threshold on the largest batch gradient norm of an epoch.
    pub tolerance: f64,
    /// Emit per-epoch loss at debug level instead of trace.
    pub verbose: bool,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_epochs: 1000,
            batch_size: 32,
            l2: 0.0,
            tolerance: 1e-6,
            verbose: false,
        }
    }
}

impl LinearConfig {
    /// Starts a builder initialized with the defaults.
    pub fn builder() -> LinearConfigBuilder {
        LinearConfigBuilder::default()
    }

    /// Checks every hyperparameter against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ModelError::invalid(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.batch_size == 0 {
            return Err(ModelError::invalid("batch_size must be > 0"));
        }
        if !self.l2.is_finite() || self.l2 < 0.0 {
            return Err(ModelError::invalid(format!(
                "l2 must be finite and >= 0, got {}",
                self.l2
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ModelError::invalid(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parses a JSON object into a validated config.
    ///
    /// ```rust
    /// use ml_models::LinearConfig;
    ///
    /// let config = LinearConfig::from_json(r#"{ "learning_rate": 0.1 }"#).unwrap();
    /// assert_eq!(config.learning_rate, 0.1);
    /// assert_eq!(config.batch_size, 32);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LinearConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent builder for [`LinearConfig`].
#[derive(Clone, Debug, Default)]
pub struct LinearConfigBuilder {
    config: LinearConfig,
}

impl LinearConfigBuilder {
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.config.learning_rate = lr;
        self
    }

    pub fn max_epochs(mut self, epochs: usize) -> Self {
        self.config.max_epochs = epochs;
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn l2(mut self, lambda: f64) -> Self {
        self.config.l2 = lambda;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets verbosity of per-epoch loss events.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Validates and returns the config.
    ///
    /// # Errors
    /// [`ModelError::InvalidParameter`] if any value is out of range.
    pub fn build(self) -> Result<LinearConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_values() {
        let config = LinearConfig::builder().build().unwrap();

        assert_eq!(config, LinearConfig::default());
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.max_epochs, 1000);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.l2, 0.0);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder_chaining() {
        let config = LinearConfig::builder()
            .learning_rate(0.1)
            .max_epochs(250)
            .batch_size(128)
            .l2(0.5)
            .tolerance(0.0)
            .verbose(true)
            .build()
            .unwrap();

        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.max_epochs, 250);
        assert_eq!(config.batch_size, 128);
        assert_eq!(config.l2, 0.5);
        assert_eq!(config.tolerance, 0.0);
        assert!(config.verbose);
    }

    #[test]
    fn test_builder_zero_epochs_allowed() {
        let config = LinearConfig::builder().max_epochs(0).build().unwrap();
        assert_eq!(config.max_epochs, 0);
    }

    #[test]
    fn test_builder_rejects_zero_batch_size() {
        let err = LinearConfig::builder().batch_size(0).build().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = LinearConfig::builder().learning_rate(lr).build().unwrap_err();
            assert!(matches!(err, ModelError::InvalidParameter(_)), "lr = {}", lr);
        }
    }

    #[test]
    fn test_builder_rejects_negative_l2() {
        let err = LinearConfig::builder().l2(-1.0).build().unwrap_err();
        assert!(err.to_string().contains("l2"));
    }

    #[test]
    fn test_builder_rejects_negative_tolerance() {
        let err = LinearConfig::builder().tolerance(-1e-3).build().unwrap_err();
        assert!(err.to_string().contains("tolerance"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = LinearConfig::from_json(r#"{ "max_epochs": 10, "l2": 0.25 }"#).unwrap();

        assert_eq!(config.max_epochs, 10);
        assert_eq!(config.l2, 0.25);
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.batch_size, 32);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = LinearConfig::from_json(r#"{ "batch_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = LinearConfig::from_json("learning_rate = 0.1").unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip_preserves_values() {
        let config = LinearConfig::builder()
            .learning_rate(0.05)
            .batch_size(8)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(LinearConfig::from_json(&json).unwrap(), config);
    }
}
