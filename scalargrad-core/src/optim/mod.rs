// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built from scalar values.
//!
//! This module provides the `Optimizer` trait and plain stochastic gradient
//! descent, optionally with momentum and weight decay.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
