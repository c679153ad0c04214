use super::*;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), 6.0);
    assert_eq!(c.op(), Op::Mul);
}

#[test]
fn test_mul_backward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_square_accumulates_both_paths() {
    let x = Value::new(-1.5);
    let y = &x * &x;
    y.backward();
    assert_eq!(x.grad(), -3.0);
}

#[test]
fn test_mul_commutes_with_literal() {
    let x = Value::new(0.75);
    let left = &x * 4.0;
    let right = 4.0 * &x;
    assert_eq!(left.data(), right.data());
    left.backward();
    let after_left = x.grad();
    x.zero_grad();
    right.backward();
    assert_eq!(after_left, x.grad());
    assert_eq!(x.grad(), 4.0);
}

#[test]
fn test_mul_int_and_float_literals_agree() {
    let x = Value::new(1.5);
    let from_int = &x * 2 + 1;
    let from_float = &x * 2.0 + 1.0;
    assert_eq!(from_int.data(), 4.0);
    assert_eq!(from_int.data(), from_float.data());

    from_int.backward();
    let grad_int = x.grad();
    x.zero_grad();
    from_float.backward();
    assert_eq!(grad_int, x.grad());
    assert_eq!(grad_int, 2.0);

    x.zero_grad();
    let left = 2 * &x;
    let wide = 2.0f32 * &x;
    assert_eq!(left.data(), wide.data());
    left.backward();
    assert_eq!(x.grad(), 2.0);
}
