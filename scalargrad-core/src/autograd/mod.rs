//! Reverse-mode differentiation over the scalar graph.
//!
//! `graph` orders the nodes reachable from a root, `backward_op` holds the
//! operation tags and their local gradient rules, and `grad_check` compares
//! the analytic gradients against finite differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, finite_diff_grad, GradCheckError};
pub use graph::ComputationGraph;
