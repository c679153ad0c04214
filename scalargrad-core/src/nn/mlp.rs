use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::module::{prefixed, Module};
use crate::nn::{Activation, Layer, Parameter};
use crate::value::Value;

/// A multilayer perceptron: layers of sizes `[nin] + nouts`, chained.
///
/// Every neuron uses tanh, including the output layer, so predictions lie in
/// `(-1, 1)`.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new(nin: usize, nouts: &[usize]) -> Result<Self, ScalarGradError> {
        Self::with_rng(nin, nouts, &mut rand::thread_rng())
    }

    /// # Errors
    /// `InvalidConfig` when `nouts` is empty or any size is zero.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::with_rng(pair[0], pair[1], Activation::Tanh, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let param_count: usize = layers.iter().map(|l| l.parameters().len()).sum();
        log::debug!("Built MLP {:?} with {} parameters", sizes, param_count);
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Forward pass for a model with exactly one output.
    ///
    /// # Errors
    /// `InvalidConfig` if the last layer is wider than one neuron, plus any
    /// error from [`Module::forward`].
    pub fn predict(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        let outputs = self.forward(inputs)?;
        match <[Value; 1]>::try_from(outputs) {
            Ok([single]) => Ok(single),
            Err(outputs) => Err(ScalarGradError::InvalidConfig(format!(
                "predict needs a single-output model, this one has {} outputs",
                outputs.len()
            ))),
        }
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
