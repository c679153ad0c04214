use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the gradient accumulated on each parameter by the last backward
    /// pass and replaces the parameter's leaf with the updated value.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass: gradients accumulate otherwise.
    fn zero_grad(&mut self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// The parameters this optimizer updates.
    fn parameters(&self) -> &[Parameter];
}
