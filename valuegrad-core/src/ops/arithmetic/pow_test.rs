use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::graph::Graph;
use crate::node::Operation;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_integer_and_fractional() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(4.0);

    assert_relative_eq!(pow_op(&a, 3)?.value(), 64.0);
    assert_relative_eq!(pow_op(&a, 0.5)?.value(), 2.0);
    assert_relative_eq!(pow_op(&a, -1)?.value(), 0.25);
    assert_eq!(
        pow_op(&a, 2.0)?.operation(),
        Operation::Pow { exponent: 2.0 }
    );
    Ok(())
}

#[test]
fn test_pow_exponent_is_not_an_operand() -> Result<(), ValueGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let before = graph.len();
    let result = pow_op(&a, 2.0)?;

    // only the result node is allocated
    assert_eq!(graph.len(), before + 1);
    assert_eq!(result.operands().len(), 1);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), ValueGradError> {
    // z = x^3, dz/dx = 3x^2
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let z = pow_op(&x, 3.0)?;

    z.backward();
    assert_relative_eq!(x.grad(), 12.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_backward_fractional() -> Result<(), ValueGradError> {
    // z = x^0.5, dz/dx = 0.5 / sqrt(x)
    let graph = Graph::new();
    let x = graph.leaf(9.0);
    let z = x.powf(0.5);

    z.backward();
    assert_relative_eq!(x.grad(), 0.5 / 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_node_exponent_is_invalid() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let p = graph.leaf(3.0);
    let before = graph.len();

    match pow_op(&a, &p) {
        Err(ValueGradError::InvalidOperand { operation, .. }) => assert_eq!(operation, "pow"),
        other => panic!("Expected InvalidOperand, got {:?}", other),
    }
    assert_eq!(graph.len(), before);
    assert!(a.try_pow(p).is_err());
}

#[test]
fn test_pow_grad_check() -> Result<(), GradCheckError> {
    let config = GradCheckConfig::default();
    for exponent in [2.0, 3.0, -1.0, 0.5, 1.5] {
        check_grad(|_: &Graph, v: &[Value]| pow_op(&v[0], exponent), &[1.7], &config)?;
    }
    Ok(())
}
