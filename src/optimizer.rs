//! Parameter update rules.
//!
//! Optimizers are decoupled from the training loop: the model computes
//! gradients, the optimizer turns `(params, grads)` into new params.

use crate::model::linear::LinearParams;

/// Trait for gradient-based optimizers.
///
/// # Type Parameters
/// * `P` — model parameters type (e.g., [`LinearParams`])
pub trait Optimizer<P> {
    /// Performs an optimization step and returns the updated parameters.
    ///
    /// Inputs are not mutated.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Stochastic Gradient Descent (SGD) optimizer.
///
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
/// Stateless: no momentum, no adaptive learning rate.
#[derive(Clone, Copy, Debug)]
pub struct SGD {
    lr: f64,
}

impl SGD {
    /// Creates a new SGD optimizer with the specified learning rate.
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }

    /// Returns the current learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl Optimizer<LinearParams> for SGD {
    fn step(&self, params: &LinearParams, grads: &LinearParams) -> LinearParams {
        LinearParams {
            weights: &params.weights - &(&grads.weights * self.lr),
            bias: params.bias - self.lr * grads.bias,
        }
    }
}
