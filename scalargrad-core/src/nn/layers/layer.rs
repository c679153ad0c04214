use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::module::{prefixed, Module};
use crate::nn::{Activation, Neuron, Parameter};
use crate::value::Value;

/// `nout` independent neurons fed the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(nin: usize, nout: usize) -> Result<Self, ScalarGradError> {
        Self::with_rng(nin, nout, Activation::Tanh, &mut rand::thread_rng())
    }

    /// # Errors
    /// `InvalidConfig` when `nin` or `nout` is zero.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nout == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(nin, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let Some(first) = neurons.first() else {
            return Err(ScalarGradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            ));
        };
        let nin = first.nin();
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::InputSizeMismatch { expected: nin, actual: odd.nin() });
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}
