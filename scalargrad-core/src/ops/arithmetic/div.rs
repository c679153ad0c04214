// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// `a / b`, built as `a * b^-1`. The quotient rule falls out of the `mul` and
/// `pow` rules, so there is no dedicated division node.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
