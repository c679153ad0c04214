use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all network building blocks (neurons, layers, MLPs).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `InputSizeMismatch` when `inputs` does not have the width the module
    /// was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter, including those of sub-modules.
    ///
    /// The returned handles share their cells with the module, so an
    /// optimizer updating them updates the module.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns every parameter with a hierarchical name such as
    /// `"layers.0.neurons.2.w1"`.
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Convenience forward pass over plain numbers, each wrapped in a fresh leaf.
    fn forward_f64(&self, inputs: &[f64]) -> Result<Vec<Value>, ScalarGradError> {
        let values: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&values)
    }
}

/// Prefixes every name in `named` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Parameter)>) -> Vec<(String, Parameter)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock module for the default methods
    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            Ok(inputs.iter().map(|x| x * &self.param.value()).collect())
        }

        fn parameters(&self) -> Vec<Parameter> {
            vec![self.param.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Parameter)> {
            let name = self.param.name().unwrap_or("param").to_string();
            vec![(name, self.param.clone())]
        }
    }

    #[test]
    fn test_default_zero_grad() -> Result<(), ScalarGradError> {
        let module = MockModule { param: Parameter::new(3.0, "scale") };
        let out = module.forward_f64(&[2.0])?;
        out[0].backward();
        assert_eq!(module.param.grad(), 2.0);

        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_prefixed_names() {
        let module = MockModule { param: Parameter::new_unnamed(1.0) };
        let named = prefixed("layers.0", module.named_parameters());
        assert_eq!(named[0].0, "layers.0.param");
    }
}
