// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::Op;
use crate::value::Value;

/// `-a`.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Op::Neg, vec![a.clone()])
}

pub(crate) fn neg_backward(grad: f64) -> f64 {
    -grad
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
