// scalargrad-core/src/nn/losses/mse.rs

use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfig(format!("Unsupported reduction type: {}", s))),
        }
    }
}

/// Mean squared error between predictions and fixed targets.
///
/// The loss is an ordinary graph node: each squared difference is built with
/// `sub` and `pow`, so the gradient of every prediction comes from the
/// engine's own rules.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// # Errors
    /// `LengthMismatch` when the slices differ in length, `EmptyInput` when
    /// both are empty.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                predictions: predictions.len(),
                targets: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyInput(
                "MseLoss needs at least one prediction".to_string(),
            ));
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| (pred - target).powi(2))
            .sum();

        Ok(match self.reduction {
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
            Reduction::Sum => total,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
