pub mod exp;
pub mod tan;

pub use exp::exp_op;
pub use tan::tan_op;
