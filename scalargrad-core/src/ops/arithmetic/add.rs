// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;

/// `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add, vec![a.clone(), b.clone()])
}

/// Both operands receive the output gradient unchanged.
pub(crate) fn add_backward(grad: f64) -> [f64; 2] {
    [grad, grad]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
