//! Full-batch training loop.
//!
//! One epoch runs the model over every sample, reduces the predictions with
//! the loss, clears stale gradients, back-propagates and lets the optimizer
//! update the parameters.

use crate::error::ScalarGradError;
use crate::nn::{Module, MseLoss};
use crate::optim::Optimizer;
use crate::value::Value;

/// Hyperparameters of [`fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    /// Log the loss every `log_every` epochs. The last epoch is always logged.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { epochs: 5, log_every: 1 }
    }
}

impl TrainConfig {
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// # Errors
    /// `InvalidConfig` when `epochs` or `log_every` is zero.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig("epochs must be at least 1".to_string()));
        }
        if self.log_every == 0 {
            return Err(ScalarGradError::InvalidConfig("log_every must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Loss recorded for one epoch, measured before that epoch's update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub loss: f64,
}

/// Trains `model` on `(inputs, targets)` and returns one report per epoch.
///
/// The model must produce a single output per sample.
///
/// # Errors
/// `InvalidConfig` for a bad config or a multi-output model,
/// `LengthMismatch` when inputs and targets differ in length, `EmptyInput`
/// for an empty dataset, and any error from the model or the optimizer.
pub fn fit<M, O>(
    model: &M,
    optimizer: &mut O,
    loss_fn: &MseLoss,
    inputs: &[Vec<f64>],
    targets: &[f64],
    config: &TrainConfig,
) -> Result<Vec<EpochReport>, ScalarGradError>
where
    M: Module + ?Sized,
    O: Optimizer + ?Sized,
{
    config.validate()?;
    if inputs.len() != targets.len() {
        return Err(ScalarGradError::LengthMismatch {
            predictions: inputs.len(),
            targets: targets.len(),
        });
    }
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyInput("training set has no samples".to_string()));
    }

    let mut reports = Vec::with_capacity(config.epochs);
    for epoch in 1..=config.epochs {
        let predictions = inputs
            .iter()
            .map(|x| single_output(model.forward_f64(x)?))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate(&predictions, targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        let report = EpochReport { epoch, loss: loss.data() };
        if epoch % config.log_every == 0 || epoch == config.epochs {
            log::info!("Epoch {}, Loss: {:.6}", report.epoch, report.loss);
        }
        reports.push(report);
    }
    Ok(reports)
}

fn single_output(outputs: Vec<Value>) -> Result<Value, ScalarGradError> {
    match <[Value; 1]>::try_from(outputs) {
        Ok([output]) => Ok(output),
        Err(outputs) => Err(ScalarGradError::InvalidConfig(format!(
            "training needs a single-output model, got {} outputs",
            outputs.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::{Activation, Neuron, Reduction};
    use crate::optim::SgdOptimizer;

    #[test]
    fn test_config_defaults_and_validation() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 5);
        assert_eq!(config.log_every, 1);
        assert!(config.validate().is_ok());
        assert!(config.with_epochs(0).validate().is_err());
        assert!(config.with_log_every(0).validate().is_err());
    }

    #[test]
    fn test_fit_single_neuron_reduces_loss() -> Result<(), ScalarGradError> {
        let neuron = Neuron::from_weights(&[0.1], 0.0, Activation::Linear)?;
        let mut sgd = SgdOptimizer::new(neuron.parameters(), 0.1, 0.0, 0.0)?;
        let inputs = vec![vec![1.0], vec![2.0], vec![-1.0]];
        let targets = [2.0, 4.0, -2.0];
        let config = TrainConfig::default().with_epochs(20);

        let loss_fn = MseLoss::new(Reduction::Mean);
        let reports = fit(&neuron, &mut sgd, &loss_fn, &inputs, &targets, &config)?;
        assert_eq!(reports.len(), 20);
        assert_eq!(reports[0].epoch, 1);
        assert!(reports[19].loss < reports[0].loss);
        Ok(())
    }

    #[test]
    fn test_fit_rejects_bad_data() -> Result<(), ScalarGradError> {
        let neuron = Neuron::from_weights(&[0.1], 0.0, Activation::Tanh)?;
        let mut sgd = SgdOptimizer::new(neuron.parameters(), 0.1, 0.0, 0.0)?;
        let loss = MseLoss::default();
        let config = TrainConfig::default();

        let mismatch = fit(&neuron, &mut sgd, &loss, &[vec![1.0]], &[1.0, 2.0], &config);
        assert!(matches!(mismatch, Err(ScalarGradError::LengthMismatch { .. })));

        let empty = fit(&neuron, &mut sgd, &loss, &[], &[], &config);
        assert!(matches!(empty, Err(ScalarGradError::EmptyInput(_))));

        let wrong_width = fit(&neuron, &mut sgd, &loss, &[vec![1.0, 2.0]], &[1.0], &config);
        assert!(matches!(wrong_width, Err(ScalarGradError::InputSizeMismatch { .. })));
        Ok(())
    }
}
