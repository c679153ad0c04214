use crate::autograd::Op;
use crate::value::Value;

/// Tangent.
pub fn tan_op(a: &Value) -> Value {
    Value::from_op(a.data().tan(), Op::Tan, vec![a.clone()])
}

/// d tan(x)/dx = 1 / cos(x)^2.
pub(crate) fn tan_backward(x: f64, grad: f64) -> f64 {
    let c = x.cos();
    grad / (c * c)
}
