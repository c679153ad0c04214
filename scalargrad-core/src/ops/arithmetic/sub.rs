// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::Op;
use crate::value::Value;

/// `a - b`, recorded as its own operation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), Op::Sub, vec![a.clone(), b.clone()])
}

pub(crate) fn sub_backward(grad: f64) -> [f64; 2] {
    [grad, -grad]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
