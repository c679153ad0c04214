// src/nn/mod.rs
// Neurons, layers and the multilayer perceptron built on scalar values.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use parameter::Parameter;
