use thiserror::Error;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Computes gradients of a plain function with central finite differences.
///
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` along each coordinate of `point`.
pub fn finite_diff_grad<F>(f: F, point: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    let mut grads = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        perturbed[i] = point[i] + eps;
        let f_plus = f(&perturbed);
        perturbed[i] = point[i] - eps;
        let f_minus = f(&perturbed);
        perturbed[i] = point[i];
        grads.push((f_plus - f_minus) / (2.0 * eps));
    }
    grads
}

/// Checks the analytical gradients of `func` at `point` against numerical
/// gradients.
///
/// `func` receives one fresh leaf per coordinate of `point` and builds a
/// scalar expression from them. The analytical gradients come from a single
/// backward pass on that expression; the numerical ones from central
/// differences of the expression's forward value with step `epsilon`.
/// A coordinate passes when the absolute difference is at most `tolerance`
/// or the relative difference is at most `tolerance`.
///
/// Returns the analytical gradients on success.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- Analytical ---
    let leaves: Vec<Value> = point.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- Numerical ---
    let evaluate = |coords: &[f64]| -> Result<f64, ScalarGradError> {
        let inputs: Vec<Value> = coords.iter().map(|&x| Value::new(x)).collect();
        Ok(func(&inputs)?.data())
    };

    let mut perturbed = point.to_vec();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        perturbed[i] = point[i] + epsilon;
        let loss_plus = evaluate(&perturbed)?;
        perturbed[i] = point[i] - epsilon;
        let loss_minus = evaluate(&perturbed)?;
        perturbed[i] = point[i];

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            log::debug!(
                "grad check mismatch at input {}: analytical {} vs numerical {}",
                i,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
