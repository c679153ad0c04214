use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements Stochastic Gradient Descent.
///
/// Each step computes `d = grad + weight_decay * p`. With momentum the
/// buffer becomes `b = momentum * b + d` (`b = d` on the first step) and
/// `d = b`. The parameter is then replaced by `p - lr * d`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One slot per parameter, filled on the first step.
    momentum_buffers: Vec<Option<f64>>,
    steps: usize,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: parameters to optimize, usually `model.parameters()`.
    /// * `lr`: the learning rate, finite and strictly positive.
    /// * `momentum`: momentum factor in `[0, 1)`; `0.0` disables it.
    /// * `weight_decay`: L2 penalty, finite and non-negative.
    ///
    /// # Errors
    /// `InvalidConfig` for any hyperparameter outside its range.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!("Invalid learning rate: {}", lr)));
        }
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "Invalid momentum value: {}",
                momentum
            )));
        }
        if !weight_decay.is_finite() || weight_decay < 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "Invalid weight_decay value: {}",
                weight_decay
            )));
        }
        let params: Vec<Parameter> = params.into_iter().collect();
        if params.is_empty() {
            log::warn!("SgdOptimizer created with no parameters; step() will do nothing.");
        }
        let momentum_buffers = vec![None; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
            steps: 0,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!("Invalid learning rate: {}", lr)));
        }
        self.lr = lr;
        Ok(())
    }

    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let p = param.data();
            let mut d_p = param.grad();
            if !d_p.is_finite() {
                log::warn!(
                    "Non-finite gradient {} for parameter {:?}; update skipped.",
                    d_p,
                    param.name()
                );
                continue;
            }
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * p;
            }
            if self.momentum != 0.0 {
                let b = match *buffer {
                    Some(prev) => self.momentum * prev + d_p,
                    None => d_p,
                };
                *buffer = Some(b);
                d_p = b;
            }
            param.set_data(p - self.lr * d_p);
        }
        self.steps += 1;
        log::debug!(
            "SGD step {} updated {} parameters (lr={})",
            self.steps,
            self.params.len(),
            self.lr
        );
        Ok(())
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
