//! Arithmetic operators and their `std::ops` overloads.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, rpow_op};
pub use sub::sub_op;

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ops::Operand;
use crate::value::Value;

/// Implements a binary `std::ops` trait for every mix of `Value` and `&Value`
/// on top of one `fn(&Value, &Value) -> Value` constructor.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl_binary_op!(@literal $trait, $method, $op_fn, f64);
        impl_binary_op!(@literal $trait, $method, $op_fn, f32);
        impl_binary_op!(@literal $trait, $method, $op_fn, i32);
    };
    // A literal on either side goes through `Operand` to become a leaf.
    (@literal $trait:ident, $method:ident, $op_fn:ident, $lit:ty) => {
        impl $trait<$lit> for &Value {
            type Output = Value;
            fn $method(self, rhs: $lit) -> Value {
                $op_fn(self, &Operand::from(rhs).into_value())
            }
        }

        impl $trait<$lit> for Value {
            type Output = Value;
            fn $method(self, rhs: $lit) -> Value {
                $op_fn(&self, &Operand::from(rhs).into_value())
            }
        }

        impl $trait<&Value> for $lit {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Operand::from(self).into_value(), rhs)
            }
        }

        impl $trait<Value> for $lit {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Operand::from(self).into_value(), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
