use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::graph::Graph;
use crate::node::Operation;
use crate::ops::arithmetic::mul_op;
use crate::utils::testing::check_value_near;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(-4.0);
    let result = add_op(&a, &b)?;

    assert_relative_eq!(result.value(), -2.5);
    assert_eq!(result.operation(), Operation::Add);
    let operands = result.operands();
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&b));
    Ok(())
}

#[test]
fn test_add_literal_wraps_leaf() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let result = add_op(&a, 3)?;

    assert_relative_eq!(result.value(), 5.0);
    let wrapped = &result.operands()[1];
    assert!(wrapped.is_leaf());
    assert_eq!(wrapped.value(), 3.0);
    Ok(())
}

#[test]
fn test_radd_matches_add() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.25);
    let left = radd_op(0.75, &a)?;
    let right = add_op(&a, 0.75)?;
    assert_eq!(left.value(), right.value());

    left.backward();
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_backward() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let result = add_op(&a, &b)?;
    let scaled = mul_op(&result, 3.0)?;

    scaled.backward();
    check_value_near(&result, 3.0, 3.0, 1e-12);
    check_value_near(&a, 1.0, 3.0, 1e-12);
    check_value_near(&b, 2.0, 3.0, 1e-12);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let x = graph.leaf(5.0);
    let y = add_op(&x, &x)?;

    y.backward();
    assert_eq!(y.value(), 10.0);
    assert_eq!(x.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_rejects_foreign_node() {
    let a = Graph::new().leaf(1.0);
    let b = Graph::new().leaf(1.0);
    let before = a.graph().len();

    let result = add_op(&a, &b);
    assert!(matches!(result, Err(ValueGradError::InvalidOperand { .. })));
    assert_eq!(a.graph().len(), before);
    assert!(radd_op(&b, &a).is_err());
}

#[test]
fn test_add_grad_check() -> Result<(), GradCheckError> {
    let func = |_: &Graph, v: &[Value]| add_op(&v[0], &v[1]);
    check_grad(func, &[0.3, -1.7], &GradCheckConfig::default())
}
