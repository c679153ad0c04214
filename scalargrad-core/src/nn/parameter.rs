use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A learnable scalar of a [`Module`](crate::nn::Module).
///
/// Node values never change after construction, so an update *replaces* the
/// leaf this parameter points at. Clones share the same cell: the model and
/// an optimizer holding clones of its parameters always see the same leaf.
#[derive(Clone)]
pub struct Parameter {
    value: Rc<RefCell<Value>>,
    name: Option<String>,
}

impl Parameter {
    /// Creates a named parameter. The name also becomes the leaf's label.
    pub fn new(data: f64, name: impl Into<String>) -> Self {
        let name = name.into();
        Parameter {
            value: Rc::new(RefCell::new(Value::with_label(data, name.clone()))),
            name: Some(name),
        }
    }

    pub fn new_unnamed(data: f64) -> Self {
        Parameter {
            value: Rc::new(RefCell::new(Value::new(data))),
            name: None,
        }
    }

    /// The current leaf. Use it to build the forward graph.
    pub fn value(&self) -> Value {
        self.value.borrow().clone()
    }

    pub fn data(&self) -> f64 {
        self.value.borrow().data()
    }

    pub fn grad(&self) -> f64 {
        self.value.borrow().grad()
    }

    pub fn zero_grad(&self) {
        self.value.borrow().zero_grad();
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the leaf with a fresh one holding `data`.
    ///
    /// The gradient starts over at zero and graphs built from the old leaf are
    /// not affected.
    pub fn set_data(&self, data: f64) {
        let label = self.value.borrow().label();
        let fresh = match label {
            Some(label) => Value::with_label(data, label),
            None => Value::new(data),
        };
        *self.value.borrow_mut() = fresh;
    }

    /// `true` if both handles share the same cell.
    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}, {:?})", name, self.value.borrow()),
            None => write!(f, "Parameter({:?})", self.value.borrow()),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
