//! Error types for model construction, training and inference.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Error type for model operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// `predict` (or anything needing learned parameters) was called before `fit`.
    #[error("Model is not fitted: call fit before predict")]
    NotFitted,

    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Shape mismatch between two inputs.
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Feature dimension differs from the one seen during fit.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },

    /// Input contains NaN or infinite values.
    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Training failed (e.g. the loss diverged).
    #[error("Training error: {0}")]
    Training(String),

    /// A model does not expose a required capability.
    #[error("Missing capability: {capability}")]
    MissingCapability { capability: String },
}

impl ModelError {
    /// Shorthand for [`ModelError::ShapeMismatch`].
    pub fn shape(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Shorthand for [`ModelError::InvalidParameter`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Config(err.to_string())
    }
}
