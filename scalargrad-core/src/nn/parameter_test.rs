use super::*;

#[test]
fn test_parameter_creation() {
    let param = Parameter::new(0.5, "w0");
    assert_eq!(param.data(), 0.5);
    assert_eq!(param.grad(), 0.0);
    assert_eq!(param.name(), Some("w0"));
    assert_eq!(param.value().label().as_deref(), Some("w0"));
    assert!(param.value().is_leaf());

    let unnamed = Parameter::new_unnamed(1.0);
    assert_eq!(unnamed.name(), None);
}

#[test]
fn test_parameter_clone_shares_cell() {
    let param = Parameter::new(1.0, "b");
    let alias = param.clone();
    assert!(param.ptr_eq(&alias));

    alias.set_data(2.0);
    assert_eq!(param.data(), 2.0);
}

#[test]
fn test_set_data_replaces_leaf() {
    let param = Parameter::new(3.0, "w");
    let old = param.value();
    let y = &old * 2.0;
    y.backward();
    assert_eq!(param.grad(), 2.0);

    param.set_data(1.5);
    let new = param.value();
    assert!(!new.ptr_eq(&old));
    assert_eq!(new.data(), 1.5);
    assert_eq!(new.grad(), 0.0);
    assert_eq!(new.label().as_deref(), Some("w"));
    // The graph built earlier still sees the old leaf.
    assert_eq!(old.data(), 3.0);
    assert_eq!(y.data(), 6.0);
}

#[test]
fn test_parameter_zero_grad() {
    let param = Parameter::new_unnamed(1.0);
    param.value().accumulate_grad(4.0);
    assert_eq!(param.grad(), 4.0);
    param.zero_grad();
    assert_eq!(param.grad(), 0.0);
}

#[test]
fn test_parameter_debug() {
    let param = Parameter::new(1.0, "w3");
    let text = format!("{:?}", param);
    assert!(text.starts_with("Parameter(w3,"));
}
