//! Linear regression trained with mini-batch gradient descent.
//!
//! [`LinearRegressor`] starts unfitted and holds only its [`LinearConfig`].
//! [`Model::fit`] learns [`LinearParams`] (`y = x·w + b`) by minimizing MSE
//! with an optional L2 penalty; [`Model::predict`] is available afterwards.
//!
//! ```rust
//! use ml_models::{create_model, Model};
//! use ndarray::array;
//!
//! let mut model = create_model();
//! let x = array![[0.0], [1.0], [2.0], [3.0]];
//! let y = array![1.0, 3.0, 5.0, 7.0];
//!
//! model.fit(&x, &y).unwrap();
//! let preds = model.predict(&x).unwrap();
//! assert_eq!(preds.len(), 4);
//! ```

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

use crate::config::LinearConfig;
use crate::error::{ModelError, Result};
use crate::loss::{Loss, MSELoss};
use crate::metrics;
use crate::model::Model;
use crate::optimizer::{Optimizer, SGD};

/// Trainable parameters of a linear model: weights and bias.
///
/// Also used as the gradient type, so an optimizer step is `params - lr * grads`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearParams {
    pub weights: Array1<f64>,
    pub bias: f64,
}

impl LinearParams {
    /// Zero weights for `n_features` inputs and zero bias.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias: 0.0,
        }
    }

    /// Euclidean norm over weights and bias together.
    pub fn norm(&self) -> f64 {
        (self.weights.dot(&self.weights) + self.bias * self.bias).sqrt()
    }

    fn forward(&self, x: ArrayView2<f64>) -> Array1<f64> {
        x.dot(&self.weights) + self.bias
    }

    /// Parameter gradients from the gradient w.r.t. predictions:
    /// `∇w = Xᵀ·g`, `∇b = Σg`.
    fn backward(x: ArrayView2<f64>, grad_output: ArrayView1<f64>) -> Self {
        Self {
            weights: x.t().dot(&grad_output),
            bias: grad_output.sum(),
        }
    }
}

/// Linear regression model.
#[derive(Clone, Debug, Default)]
pub struct LinearRegressor {
    config: LinearConfig,
    params: Option<LinearParams>,
    loss_history: Vec<f64>,
}

impl LinearRegressor {
    /// Creates an unfitted model with the given hyperparameters.
    ///
    /// The config is checked again at the start of every `fit`.
    pub fn new(config: LinearConfig) -> Self {
        Self {
            config,
            params: None,
            loss_history: Vec::new(),
        }
    }

    pub fn config(&self) -> &LinearConfig {
        &self.config
    }

    /// Learned parameters, `None` until fitted.
    pub fn params(&self) -> Option<&LinearParams> {
        self.params.as_ref()
    }

    /// Number of features seen during fit.
    pub fn n_features_in(&self) -> Option<usize> {
        self.params.as_ref().map(|p| p.weights.len())
    }

    /// Number of epochs the last successful fit ran.
    pub fn n_iter(&self) -> usize {
        self.loss_history.len()
    }

    /// Average training loss of each epoch of the last successful fit.
    pub fn loss_history(&self) -> &[f64] {
        &self.loss_history
    }

    /// Predicts a single sample.
    pub fn predict_one(&self, sample: &Array1<f64>) -> Result<f64> {
        let params = self.fitted_params()?;
        check_features(params, sample.len())?;
        Ok(sample.dot(&params.weights) + params.bias)
    }

    /// R² of the predictions for `x` against `y`.
    pub fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<f64> {
        let preds = self.predict(x)?;
        metrics::r2_score(y.view(), preds.view())
    }

    fn fitted_params(&self) -> Result<&LinearParams> {
        self.params.as_ref().ok_or(ModelError::NotFitted)
    }

    fn train(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(LinearParams, Vec<f64>)> {
        let config = &self.config;
        let n_samples = x.nrows();
        let optimizer = SGD::new(config.learning_rate);
        let loss_fn = MSELoss;

        let mut params = LinearParams::zeros(x.ncols());
        let mut history = Vec::with_capacity(config.max_epochs.min(1 << 16));

        for epoch in 0..config.max_epochs {
            let mut total_loss = 0.0;
            let mut n_batches = 0usize;
            let mut max_grad_norm = 0.0f64;

            for start in (0..n_samples).step_by(config.batch_size) {
                let end = (start + config.batch_size).min(n_samples);
                let batch_x = x.slice(s![start..end, ..]);
                let batch_y = y.slice(s![start..end]);

                let preds = params.forward(batch_x);
                let penalty = config.l2 * params.weights.dot(&params.weights);
                total_loss += loss_fn.loss(preds.view(), batch_y) + penalty;

                let grad_preds = loss_fn.grad_wrt_prediction(preds.view(), batch_y);
                let mut grads = LinearParams::backward(batch_x, grad_preds.view());
                if config.l2 > 0.0 {
                    grads.weights = grads.weights + &params.weights * (2.0 * config.l2);
                }

                max_grad_norm = max_grad_norm.max(grads.norm());
                params = optimizer.step(&params, &grads);
                n_batches += 1;
            }

            let avg_loss = total_loss / n_batches as f64;
            if !avg_loss.is_finite() || !params.norm().is_finite() {
                tracing::warn!(epoch, learning_rate = config.learning_rate, "training diverged");
                return Err(ModelError::Training(format!(
                    "loss diverged at epoch {epoch}; try a smaller learning_rate"
                )));
            }
            history.push(avg_loss);

            if config.verbose {
                tracing::debug!(epoch, loss = avg_loss, "epoch finished");
            } else {
                tracing::trace!(epoch, loss = avg_loss, "epoch finished");
            }

            if max_grad_norm < config.tolerance {
                tracing::debug!(epoch, grad_norm = max_grad_norm, "converged");
                break;
            }
        }

        Ok((params, history))
    }
}

impl Model for LinearRegressor {
    type Input = Array2<f64>;
    type Target = Array1<f64>;
    type Output = Array1<f64>;

    /// Fits from zero-initialized parameters.
    ///
    /// # Errors
    /// - [`ModelError::InvalidParameter`] for an invalid config
    /// - [`ModelError::EmptyData`] if `x` has no rows or no columns
    /// - [`ModelError::ShapeMismatch`] if `x.nrows() != y.len()`
    /// - [`ModelError::NonFiniteInput`] if `x` or `y` holds NaN/inf
    /// - [`ModelError::Training`] if the loss diverges
    ///
    /// A failed fit leaves the model unfitted.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        self.params = None;
        self.loss_history.clear();

        self.config.validate()?;
        validate_training_data(x, y)?;

        tracing::debug!(
            n_samples = x.nrows(),
            n_features = x.ncols(),
            max_epochs = self.config.max_epochs,
            batch_size = self.config.batch_size,
            "fitting linear model"
        );

        let (params, history) = self.train(x, y)?;

        tracing::debug!(
            epochs = history.len(),
            final_loss = ?history.last(),
            "linear model fitted"
        );
        self.params = Some(params);
        self.loss_history = history;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let params = self.fitted_params()?;
        check_features(params, x.ncols())?;
        Ok(params.forward(x.view()))
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }
}

fn check_features(params: &LinearParams, got: usize) -> Result<()> {
    let expected = params.weights.len();
    if expected != got {
        return Err(ModelError::FeatureMismatch {
            expected_features: expected,
            got_features: got,
        });
    }
    Ok(())
}

fn validate_training_data(x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
    if x.nrows() == 0 {
        return Err(ModelError::EmptyData("x has no samples".into()));
    }
    if x.ncols() == 0 {
        return Err(ModelError::EmptyData("x has no features".into()));
    }
    if x.nrows() != y.len() {
        return Err(ModelError::shape(
            format!("{} targets", x.nrows()),
            format!("{} targets", y.len()),
        ));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NonFiniteInput("x contains NaN or inf".into()));
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NonFiniteInput("y contains NaN or inf".into()));
    }
    Ok(())
}
