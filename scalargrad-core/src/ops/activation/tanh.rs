use crate::autograd::Op;
use crate::value::Value;

/// Hyperbolic tangent.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Op::Tanh, vec![a.clone()])
}

/// d tanh(x)/dx = 1 - tanh(x)^2, with `output = tanh(x)`.
pub(crate) fn tanh_backward(output: f64, grad: f64) -> f64 {
    (1.0 - output * output) * grad
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward_and_backward() {
        let x = Value::new(0.8814);
        let y = x.tanh();
        assert_eq!(y.op(), Op::Tanh);
        assert_relative_eq!(y.data(), 0.8814_f64.tanh(), epsilon = 1e-12);
        y.backward();
        let t = 0.8814_f64.tanh();
        assert_relative_eq!(x.grad(), 1.0 - t * t, epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_at_zero_has_unit_slope() {
        let x = Value::new(0.0);
        let y = tanh_op(&x);
        y.backward();
        assert_eq!(y.data(), 0.0);
        assert_eq!(x.grad(), 1.0);
    }

    #[test]
    fn test_tanh_saturates() {
        let x = Value::new(40.0);
        let y = x.tanh();
        y.backward();
        assert_relative_eq!(y.data(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(x.grad(), 0.0, epsilon = 1e-12);
    }
}
