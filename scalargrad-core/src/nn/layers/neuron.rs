use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::nn::{Activation, Parameter};
use crate::value::Value;

/// A single unit computing `activation(w·x + b)`.
///
/// Weights and bias are drawn from `U(-1, 1)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a tanh neuron with `nin` inputs.
    pub fn new(nin: usize) -> Result<Self, ScalarGradError> {
        Self::with_rng(nin, Activation::Tanh, &mut rand::thread_rng())
    }

    /// Creates a neuron drawing its initial parameters from `rng`.
    ///
    /// # Errors
    /// `InvalidConfig` when `nin` is zero.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nin == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let draws = init::uniform(nin + 1, init::DEFAULT_LOW, init::DEFAULT_HIGH, rng)?;
        let weights = draws[..nin]
            .iter()
            .enumerate()
            .map(|(i, &w)| Parameter::new(w, format!("w{}", i)))
            .collect();
        let bias = Parameter::new(draws[nin], "b");
        Ok(Neuron { weights, bias, activation })
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(
        weights: &[f64],
        bias: f64,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if weights.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Parameter::new(w, format!("w{}", i)))
                .collect(),
            bias: Parameter::new(bias, "b"),
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Output of the neuron for one input vector.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        // Fold from the bias so it is the first addend.
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.value(), |acc, (w, x)| acc + &w.value() * x);
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
