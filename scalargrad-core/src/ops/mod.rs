//! # Graph Builder (`ops`)
//!
//! Every operator is a pure function from one or two input nodes (and possibly
//! a literal) to a new output node wired to its operands.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `pow_op`, `tanh_op`, ...) that computes the forward value and records the
//!   operation tag and operands on the new node.
//! - **`_backward` Functions:** the matching local gradient rule, a pure
//!   function of the forward values and the output gradient. The
//!   differentiator calls them through [`Op::backward`](crate::autograd::Op).
//! - **Operator traits:** `+ - * /` and unary `-` are implemented in
//!   [`arithmetic`] for every combination of `Value`, `&Value` and `f64`.
//!   Plain numbers go through [`Operand::into_value`] first.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, neg, mul, div, pow, rpow.
//! - [`activation`]: tanh, relu.
//! - [`math_elem`]: exp, tan.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;

pub use operand::Operand;
