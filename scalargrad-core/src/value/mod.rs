// src/value/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::value_data::ValueData;

mod autograd_methods;
mod math_methods;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the operand of any number of
///     downstream nodes (the graph is a DAG, not a tree). Cloning a `Value`
///     clones the handle, never the node.
/// 2.  **Interior Mutability:** the gradient accumulator is updated through
///     shared handles during the backward pass.
///
/// The forward value is fixed at construction. Identity is the handle's
/// pointer (see [`Value::ptr_eq`]); two nodes holding the same number are
/// still distinct graph entities, which is why `PartialEq` is not implemented.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (an input constant or a trainable parameter).
    pub fn new(data: f64) -> Self {
        Self::from_data(ValueData::leaf(data, None))
    }

    /// Creates a leaf node with a display label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Self::from_data(ValueData::leaf(data, Some(label.into())))
    }

    /// Builds the output node of an operator. Only the operator constructors
    /// in `crate::ops` create derived nodes.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Self::from_data(ValueData::derived(data, op, operands))
    }

    fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to zero. Backward passes never do this for you.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds `delta` to the gradient accumulator.
    pub fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns handles to the operands, in order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op == Op::Leaf
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Sets the display label. Labels are only used for diagnostics.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Sets the display label and returns the same node, for chaining.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Stable identity of the node for graph bookkeeping.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Borrows the node immutably.
    ///
    /// Panics if the node is currently borrowed mutably.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node mutably.
    ///
    /// Panics if the node is currently borrowed.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
