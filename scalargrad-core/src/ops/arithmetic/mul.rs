// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

/// `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul, vec![a.clone(), b.clone()])
}

/// d(ab)/da = b, d(ab)/db = a.
pub(crate) fn mul_backward(a: f64, b: f64, grad: f64) -> [f64; 2] {
    [b * grad, a * grad]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
