// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// `base ^ exponent` for a literal exponent.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.data().powf(exponent), Op::Pow { exponent }, vec![base.clone()])
}

/// `base ^ exponent` for a literal base and a node exponent.
///
/// # Errors
/// `UnsupportedOperand` if `base` is not finite and strictly positive: the
/// gradient needs `ln(base)`.
pub fn rpow_op(base: f64, exponent: &Value) -> Result<Value, ScalarGradError> {
    if !base.is_finite() || base <= 0.0 {
        return Err(ScalarGradError::UnsupportedOperand {
            operation: "rpow".to_string(),
            reason: format!("base must be finite and positive, got {}", base),
        });
    }
    Ok(Value::from_op(
        base.powf(exponent.data()),
        Op::Rpow { base },
        vec![exponent.clone()],
    ))
}

/// d(x^p)/dx = p * x^(p-1), and 0 for p = 0 (the output is constant).
pub(crate) fn pow_backward(x: f64, exponent: f64, grad: f64) -> f64 {
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * x.powf(exponent - 1.0) * grad
}

/// d(b^x)/dx = b^x * ln(b), with `output = b^x`.
pub(crate) fn rpow_backward(base: f64, output: f64, grad: f64) -> f64 {
    output * base.ln() * grad
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
