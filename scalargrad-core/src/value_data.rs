// src/value_data.rs
use std::rc::Rc;

use crate::autograd::Op;
use crate::value::Value;

/// Internal storage and metadata for a [`Value`].
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle so that a
/// node can be shared by several downstream nodes while its gradient stays
/// mutable during the backward pass.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result. Written once, at construction.
    pub(crate) data: f64,
    /// Accumulated d(root)/d(self). Starts at zero.
    pub(crate) grad: f64,
    /// Operation that produced this node (`Op::Leaf` for inputs and parameters).
    pub(crate) op: Op,
    /// Operands of `op`, in order. Empty for leaves.
    pub(crate) operands: Vec<Value>,
    /// Optional display name.
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            operands: Vec::new(),
            label,
        }
    }

    pub(crate) fn derived(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count for {op}");
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}

// Long chains would otherwise be freed recursively, one stack frame per node.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = std::mem::take(&mut self.operands);
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}
