//! # ml_models
//!
//! A model factory and the trait contract its models satisfy.
//!
//! [`create_model`] returns a fresh, unfitted model. Every model implements
//! [`Model`], which declares `fit` and `predict`, so the presence of both is
//! checked by the compiler. [`check_capabilities`] offers the same check at
//! runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use ml_models::{create_model, Model};
//! use ndarray::array;
//!
//! let mut model = create_model();
//! model.fit(&array![[1.0], [2.0], [3.0]], &array![2.0, 4.0, 6.0])?;
//!
//! let preds = model.predict(&array![[4.0]])?;
//! assert_eq!(preds.len(), 1);
//! # Ok::<(), ml_models::ModelError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `models` — the factory (`create_model`, `create_model_with`)
//! - `model` — the `Model` trait, capabilities and the linear regressor
//! - `config` — hyperparameters and their builder
//! - `loss` — differentiable loss functions
//! - `optimizer` — parameter update rules
//! - `metrics` — regression metrics
//! - `error` — crate error type

/// Hyperparameters and their validation.
pub mod config;

pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Regression metrics.
pub mod metrics;

/// The model trait and its implementations.
pub mod model;

/// Model factory.
pub mod models;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

pub use config::{LinearConfig, LinearConfigBuilder};
pub use error::{ModelError, Result};
pub use model::{check_capabilities, Capability, LinearParams, LinearRegressor, Model};
pub use models::{create_model, create_model_with, DefaultModel};
