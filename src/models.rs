//! Model factory.

use crate::config::LinearConfig;
use crate::error::Result;
use crate::model::linear::LinearRegressor;

/// The model returned by [`create_model`].
pub type DefaultModel = LinearRegressor;

/// Creates a fresh, unfitted model with default hyperparameters.
///
/// Every call returns a new instance; nothing is cached or shared. The
/// result always implements [`Model`](crate::model::Model), so `fit` and
/// `predict` are available on it.
///
/// ```rust
/// use ml_models::{create_model, Capability, Model};
///
/// let model = create_model();
/// assert!(model.supports(Capability::Fit));
/// assert!(model.supports(Capability::Predict));
/// assert!(!model.is_fitted());
/// ```
pub fn create_model() -> DefaultModel {
    LinearRegressor::new(LinearConfig::default())
}

/// Creates a fresh, unfitted model with the given hyperparameters.
///
/// # Errors
/// [`ModelError::InvalidParameter`](crate::ModelError::InvalidParameter) if
/// `config` fails validation.
pub fn create_model_with(config: LinearConfig) -> Result<DefaultModel> {
    config.validate()?;
    Ok(LinearRegressor::new(config))
}
