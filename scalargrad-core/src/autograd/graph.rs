use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::value::Value;
use crate::value_data::ValueData;

/// Identity of a node during graph traversal: the address of its shared cell.
///
/// The pointer is only used as a key while the traversal holds handles to
/// every node, so it never dangles.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Topologically sorts the graph rooted at `root`.
///
/// Depth-first, operands before the node itself, with an explicit stack so
/// that chains of many thousands of nodes do not exhaust the call stack.
/// Each node is emitted exactly once even when it is reachable through
/// several paths. The returned post-order ends with `root`.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Value> = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }
    sorted
}

/// The nodes reachable from one root, ordered for a backward pass.
#[derive(Debug)]
pub struct ComputationGraph {
    /// Root first; every node precedes all of its operands.
    order: Vec<Value>,
    /// Position of each node in `order`.
    positions: HashMap<NodeId, usize>,
}

impl ComputationGraph {
    /// Collects and orders every node `root` depends on, `root` included.
    pub fn build(root: &Value) -> Self {
        let mut order = topological_sort(root);
        order.reverse();
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, node)| (node.node_id(), i))
            .collect();
        ComputationGraph { order, positions }
    }

    /// Nodes in reverse topological order (root first).
    pub fn nodes(&self) -> &[Value] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Propagates `d(root)/d(node)` to every node and adds it to the node's
    /// gradient accumulator.
    ///
    /// Contributions of the current pass are summed per node before the node
    /// fires, so a node shared by several consumers forwards the full sum to
    /// its own operands.
    pub fn backward(&self) {
        let mut pass_grads = vec![0.0_f64; self.order.len()];
        if let Some(root_grad) = pass_grads.first_mut() {
            *root_grad = 1.0;
        }

        for (i, node) in self.order.iter().enumerate() {
            let grad = pass_grads[i];
            node.accumulate_grad(grad);

            let guard = node.read_data();
            let contributions = guard.op.backward(&guard.operands, guard.data, grad);
            for (operand, contribution) in guard.operands.iter().zip(contributions) {
                // Operands always come later in `order`.
                let j = self.positions[&operand.node_id()];
                pass_grads[j] += contribution;
            }
            log::trace!("node {} ({}) grad += {}", i, guard.op, grad);
        }
    }
}
