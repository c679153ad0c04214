//! Scalar reverse-mode automatic differentiation.
//!
//! A [`Value`] is a node of a dynamically built computation graph. Arithmetic
//! on values records provenance, and [`Value::backward`] propagates exact
//! gradients to every ancestor with the chain rule. The `nn`, `optim` and
//! `train` modules build a small multilayer perceptron on top of the engine.

// Core graph
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Built on the engine
pub mod nn;
pub mod optim;
pub mod train;
pub mod viz;

pub mod error;

pub use error::ScalarGradError;
pub use ops::Operand;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
