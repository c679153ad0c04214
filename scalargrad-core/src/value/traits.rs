// src/value/traits.rs

use std::fmt;
use std::iter::{Product, Sum};
use std::rc::Rc;

use num_traits::{One, Zero};

use crate::value::Value;

impl Clone for Value {
    /// Shallow clone: the new handle points at the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={}, op={}", guard.data, guard.grad, guard.op)?;
        if let Some(label) = &guard.label {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

impl Zero for Value {
    /// A fresh leaf holding `0.0`.
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    /// A fresh leaf holding `1.0`.
    fn one() -> Self {
        Value::new(1.0)
    }
}

impl Sum for Value {
    /// Chains `add` nodes starting from a zero leaf. An empty iterator yields
    /// the zero leaf itself.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| acc + v)
    }
}

impl Product for Value {
    fn product<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::one(), |acc, v| acc * v)
    }
}

impl<'a> Product<&'a Value> for Value {
    fn product<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::one(), |acc, v| acc * v)
    }
}
