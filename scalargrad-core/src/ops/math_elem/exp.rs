use crate::autograd::Op;
use crate::value::Value;

/// `e ^ a`.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

/// d e^x/dx = e^x, with `output = e^x`.
pub(crate) fn exp_backward(output: f64, grad: f64) -> f64 {
    output * grad
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_and_backward() {
        let x = Value::new(1.0);
        let y = x.exp();
        assert_relative_eq!(y.data(), std::f64::consts::E, epsilon = 1e-12);
        y.backward();
        assert_relative_eq!(x.grad(), std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_matches_rpow_of_e() -> Result<(), crate::ScalarGradError> {
        let x = Value::new(0.3);
        let via_exp = x.exp();
        let via_rpow = x.rpow(std::f64::consts::E)?;
        assert_relative_eq!(via_exp.data(), via_rpow.data(), epsilon = 1e-12);
        Ok(())
    }
}
