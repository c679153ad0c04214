use crate::error::ScalarGradError;
use crate::value::Value;

/// Either a graph node or a plain number.
///
/// Binary operators accept anything convertible into an `Operand` and turn
/// numbers into fresh leaf nodes in one place, [`Operand::into_value`], before
/// building their output node.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Scalar(f64),
}

impl Operand {
    /// Coerces the operand to a node. A number becomes a new, unlabeled leaf.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Scalar(x) => Value::new(x),
        }
    }

    /// Extracts a literal exponent for `operation`.
    ///
    /// # Errors
    /// `UnsupportedOperand` for graph nodes and for NaN or infinite numbers.
    pub(crate) fn into_exponent(self, operation: &str) -> Result<f64, ScalarGradError> {
        match self {
            Operand::Scalar(x) if x.is_finite() => Ok(x),
            Operand::Scalar(x) => Err(ScalarGradError::UnsupportedOperand {
                operation: operation.to_string(),
                reason: format!("exponent must be finite, got {}", x),
            }),
            Operand::Node(_) => Err(ScalarGradError::UnsupportedOperand {
                operation: operation.to_string(),
                reason: "exponent must be a numeric literal, not a graph node".to_string(),
            }),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}
