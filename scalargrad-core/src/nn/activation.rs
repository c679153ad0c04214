use std::fmt;
use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity; the neuron outputs `w·x + b` unchanged.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Linear => x.clone(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "linear" | "identity" => Ok(Activation::Linear),
            _ => Err(ScalarGradError::InvalidConfig(format!("Unsupported activation: {}", s))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Linear => "linear",
        };
        f.write_str(name)
    }
}
