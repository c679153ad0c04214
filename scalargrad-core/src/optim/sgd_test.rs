use super::*;
use approx::assert_relative_eq;

// Helper to create a parameter with a preset gradient
fn create_param(data: f64, grad: f64) -> Parameter {
    let param = Parameter::new_unnamed(data);
    param.value().set_grad(grad);
    param
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let params = vec![create_param(1.0, 0.1), create_param(-2.0, 0.4)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0)?;
    optimizer.step()?;

    assert_relative_eq!(params[0].data(), 0.99, epsilon = 1e-12);
    assert_relative_eq!(params[1].data(), -2.04, epsilon = 1e-12);
    assert_eq!(optimizer.steps(), 1);
    Ok(())
}

#[test]
fn test_sgd_step_replaces_leaf() -> Result<(), ScalarGradError> {
    let param = create_param(1.0, 1.0);
    let before = param.value();
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.5, 0.0, 0.0)?;
    optimizer.step()?;

    assert!(!param.value().ptr_eq(&before));
    assert_eq!(before.data(), 1.0);
    assert_eq!(param.data(), 0.5);
    assert_eq!(param.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
    let params = vec![create_param(1.0, 3.0), create_param(2.0, -1.0)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0)?;
    optimizer.zero_grad();
    assert!(params.iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarGradError> {
    let param = create_param(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.9, 0.0)?;

    optimizer.step()?; // b = 1.0, p = 0.9
    assert_relative_eq!(param.data(), 0.9, epsilon = 1e-12);

    param.value().set_grad(1.0);
    optimizer.step()?; // b = 0.9 + 1.0, p = 0.9 - 0.19
    assert_relative_eq!(param.data(), 0.71, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let param = create_param(2.0, 0.0);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.0, 0.5)?;
    optimizer.step()?; // d = 0 + 0.5 * 2
    assert_relative_eq!(param.data(), 1.9, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_skips_non_finite_gradient() -> Result<(), ScalarGradError> {
    let param = create_param(1.0, f64::NAN);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.0, 0.0)?;
    optimizer.step()?;
    assert_eq!(param.data(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    let p = || vec![create_param(1.0, 0.0)];
    let invalid = [
        (0.0, 0.0, 0.0),
        (f64::NAN, 0.0, 0.0),
        (0.1, 1.0, 0.0),
        (0.1, -0.1, 0.0),
        (0.1, 0.0, -1.0),
    ];
    for (lr, momentum, weight_decay) in invalid {
        assert!(matches!(
            SgdOptimizer::new(p(), lr, momentum, weight_decay),
            Err(ScalarGradError::InvalidConfig(_))
        ));
    }
}

#[test]
fn test_sgd_set_lr() -> Result<(), ScalarGradError> {
    let mut optimizer = SgdOptimizer::new(vec![create_param(1.0, 0.0)], 0.1, 0.0, 0.0)?;
    optimizer.set_lr(0.01)?;
    assert_eq!(optimizer.lr(), 0.01);
    assert!(optimizer.set_lr(-1.0).is_err());
    Ok(())
}
