// src/value/autograd_methods.rs

use crate::autograd::graph::ComputationGraph;
use crate::value::Value;

impl Value {
    /// Runs a backward pass rooted at this node.
    ///
    /// The root is seeded with `1.0` and every node reachable from it receives
    /// `d(self)/d(node)` added to its gradient accumulator. Gradients are not
    /// cleared first: running two passes without [`Value::zero_grad`] in
    /// between leaves exactly twice the single-pass gradients everywhere.
    pub fn backward(&self) {
        let graph = ComputationGraph::build(self);
        log::debug!("backward() over {} nodes", graph.len());
        graph.backward();
    }

    /// Zeroes the gradient of this node and of every node it depends on.
    pub fn zero_grad_graph(&self) {
        for node in ComputationGraph::build(self).nodes() {
            node.zero_grad();
        }
    }
}
