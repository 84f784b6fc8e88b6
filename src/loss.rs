use ndarray::{Array1, ArrayView1};

/// A trait for differentiable loss functions used during model training.
///
/// Implementors must define:
/// - How to compute the scalar loss value (for logging/metrics).
/// - How to compute the gradient of the loss w.r.t. the model's predictions.
///
/// The gradient is what a model's backward pass turns into parameter gradients.
pub trait Loss {
    /// Computes the scalar loss value.
    fn loss(&self, prediction: ArrayView1<f64>, target: ArrayView1<f64>) -> f64;

    /// Computes the gradient of the loss w.r.t. the prediction: ∂L/∂pred.
    fn grad_wrt_prediction(
        &self,
        prediction: ArrayView1<f64>,
        target: ArrayView1<f64>,
    ) -> Array1<f64>;
}

/// Mean Squared Error (MSE) loss: `L = (1/n) * Σ(pred_i - target_i)^2`
///
/// Gradient w.r.t. prediction: `∂L/∂pred = (pred - target) / n`
///
/// Note: The factor of 2 is omitted, as it can be absorbed into the learning rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MSELoss;

impl Loss for MSELoss {
    fn loss(&self, pred: ArrayView1<f64>, target: ArrayView1<f64>) -> f64 {
        if pred.is_empty() {
            return 0.0;
        }
        let diff = &pred - &target;
        diff.dot(&diff) / pred.len() as f64
    }

    fn grad_wrt_prediction(&self, pred: ArrayView1<f64>, target: ArrayView1<f64>) -> Array1<f64> {
        if pred.is_empty() {
            return Array1::zeros(0);
        }
        (&pred - &target) / pred.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mse_loss_value() {
        let pred = array![1.0, 2.0, 3.0];
        let target = array![1.0, 1.0, 1.0];

        // (0 + 1 + 4) / 3
        let l = MSELoss.loss(pred.view(), target.view());
        assert!((l - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mse_loss_zero_on_perfect_prediction() {
        let y = array![0.5, -2.0, 7.0];
        assert_eq!(MSELoss.loss(y.view(), y.view()), 0.0);
    }

    #[test]
    fn test_mse_grad() {
        let pred = array![2.0, 0.0];
        let target = array![1.0, 1.0];

        let g = MSELoss.grad_wrt_prediction(pred.view(), target.view());
        assert_eq!(g.to_vec(), vec![0.5, -0.5]);
    }

    #[test]
    fn test_mse_empty_input() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(MSELoss.loss(empty.view(), empty.view()), 0.0);
        assert!(MSELoss
            .grad_wrt_prediction(empty.view(), empty.view())
            .is_empty());
    }
}
