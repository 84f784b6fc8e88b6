//! Regression metrics.

use ndarray::ArrayView1;

use crate::error::{ModelError, Result};

fn check_lengths(y_true: &ArrayView1<f64>, y_pred: &ArrayView1<f64>) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::shape(
            format!("{} predictions", y_true.len()),
            format!("{} predictions", y_pred.len()),
        ));
    }
    if y_true.is_empty() {
        return Err(ModelError::EmptyData("metric over zero samples".into()));
    }
    Ok(())
}

/// Mean Squared Error: `mean((y_true - y_pred)^2)`.
pub fn mse(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    check_lengths(&y_true, &y_pred)?;
    let diff = &y_true - &y_pred;
    Ok(diff.dot(&diff) / y_true.len() as f64)
}

/// Mean Absolute Error: `mean(|y_true - y_pred|)`.
pub fn mae(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    check_lengths(&y_true, &y_pred)?;
    let sum_abs: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p).abs())
        .sum();
    Ok(sum_abs / y_true.len() as f64)
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// A constant `y_true` has `SS_tot == 0`; the score is then 1.0 for a
/// perfect prediction and 0.0 otherwise.
pub fn r2_score(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    check_lengths(&y_true, &y_pred)?;
    let n = y_true.len() as f64;
    let mean = y_true.sum() / n;

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p).powi(2))
        .sum();
    let ss_tot: f64 = y_true.iter().map(|&t| (t - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mse() {
        let t = array![1.0, 2.0, 3.0];
        let p = array![1.0, 2.0, 5.0];
        assert!((mse(t.view(), p.view()).unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mae() {
        let t = array![1.0, -1.0];
        let p = array![2.0, 1.0];
        assert_eq!(mae(t.view(), p.view()).unwrap(), 1.5);
    }

    #[test]
    fn test_r2_perfect() {
        let t = array![1.0, 2.0, 3.0];
        assert_eq!(r2_score(t.view(), t.view()).unwrap(), 1.0);
    }

    #[test]
    fn test_r2_mean_predictor_is_zero() {
        let t = array![1.0, 2.0, 3.0];
        let p = array![2.0, 2.0, 2.0];
        assert!(r2_score(t.view(), p.view()).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r2_constant_target() {
        let t = array![4.0, 4.0];
        assert_eq!(r2_score(t.view(), t.view()).unwrap(), 1.0);
        let p = array![4.0, 5.0];
        assert_eq!(r2_score(t.view(), p.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let t = array![1.0, 2.0];
        let p = array![1.0];
        let err = mse(t.view(), p.view()).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_empty_input() {
        let e = ndarray::Array1::<f64>::zeros(0);
        let err = r2_score(e.view(), e.view()).unwrap_err();
        assert!(matches!(err, ModelError::EmptyData(_)));
    }
}
