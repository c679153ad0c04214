use std::fmt;

use crate::ops::activation::{relu, tanh};
use crate::ops::arithmetic::{add, mul, neg, pow, sub};
use crate::ops::math_elem::{exp, tan};
use crate::value::Value;

/// Identifies how a node was produced.
///
/// Every non-leaf node stores its `Op` next to its operands. During the
/// backward pass the differentiator matches on the tag and applies the
/// corresponding local gradient rule; no per-node closure is stored.
/// Literal parameters of an operation (the exponent of `pow`, the base of
/// `rpow`) live in the tag because they are not graph nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input constant or trainable parameter.
    Leaf,
    Add,
    Sub,
    Neg,
    Mul,
    /// `operand ^ exponent` with a literal exponent.
    Pow { exponent: f64 },
    /// `base ^ operand` with a literal base.
    Rpow { base: f64 },
    Tanh,
    Tan,
    Exp,
    Relu,
}

impl Op {
    /// Number of operands a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Sub | Op::Mul => 2,
            Op::Neg
            | Op::Pow { .. }
            | Op::Rpow { .. }
            | Op::Tanh
            | Op::Tan
            | Op::Exp
            | Op::Relu => 1,
        }
    }

    /// Computes the gradient contribution of a node to each of its operands.
    ///
    /// `output` is the node's forward value and `grad` the node's gradient for
    /// the current pass. The returned slots line up with `operands`; unused
    /// slots are zero.
    pub(crate) fn backward(&self, operands: &[Value], output: f64, grad: f64) -> [f64; 2] {
        match self {
            Op::Leaf => [0.0, 0.0],
            Op::Add => add::add_backward(grad),
            Op::Sub => sub::sub_backward(grad),
            Op::Neg => [neg::neg_backward(grad), 0.0],
            Op::Mul => mul::mul_backward(operands[0].data(), operands[1].data(), grad),
            Op::Pow { exponent } => [pow::pow_backward(operands[0].data(), *exponent, grad), 0.0],
            Op::Rpow { base } => [pow::rpow_backward(*base, output, grad), 0.0],
            Op::Tanh => [tanh::tanh_backward(output, grad), 0.0],
            Op::Tan => [tan::tan_backward(operands[0].data(), grad), 0.0],
            Op::Exp => [exp::exp_backward(output, grad), 0.0],
            Op::Relu => [relu::relu_backward(operands[0].data(), grad), 0.0],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Sub => write!(f, "-"),
            Op::Neg => write!(f, "neg"),
            Op::Mul => write!(f, "*"),
            Op::Pow { exponent } => write!(f, "**{}", exponent),
            Op::Rpow { base } => write!(f, "{}**", base),
            Op::Tanh => write!(f, "tanh"),
            Op::Tan => write!(f, "tan"),
            Op::Exp => write!(f, "exp"),
            Op::Relu => write!(f, "relu"),
        }
    }
}
