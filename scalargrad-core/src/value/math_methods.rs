// src/value/math_methods.rs

use num_traits::ToPrimitive;

use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{pow_op, rpow_op};
use crate::ops::math_elem::{exp_op, tan_op};
use crate::ops::Operand;
use crate::value::Value;

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn tan(&self) -> Value {
        tan_op(self)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    /// Raises this node to a literal power.
    ///
    /// # Errors
    /// `UnsupportedOperand` if the exponent is a graph node or not finite.
    /// Differentiating with respect to an exponent goes through [`Value::rpow`].
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        let exponent = exponent.into().into_exponent("pow")?;
        Ok(pow_op(self, exponent))
    }

    /// Infallible `pow` for a float literal exponent.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Infallible `pow` for an integer literal exponent.
    pub fn powi(&self, exponent: i32) -> Value {
        pow_op(self, f64::from(exponent))
    }

    /// Computes `base ^ self` for a numeric `base`, differentiating with
    /// respect to this node only.
    ///
    /// # Errors
    /// `UnsupportedOperand` if `base` is not representable as a finite, strictly
    /// positive `f64` (its logarithm is needed by the gradient).
    pub fn rpow<B: ToPrimitive>(&self, base: B) -> Result<Value, ScalarGradError> {
        let base = base.to_f64().ok_or_else(|| ScalarGradError::UnsupportedOperand {
            operation: "rpow".to_string(),
            reason: "base is not representable as f64".to_string(),
        })?;
        rpow_op(base, self)
    }
}
