use crate::autograd::Op;
use crate::value::Value;

/// `max(0, a)`.
pub fn relu_op(a: &Value) -> Value {
    Value::from_op(a.data().max(0.0), Op::Relu, vec![a.clone()])
}

/// Passes the gradient through for positive inputs only. The subgradient at
/// zero is taken as 0.
pub(crate) fn relu_backward(x: f64, grad: f64) -> f64 {
    if x > 0.0 {
        grad
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
