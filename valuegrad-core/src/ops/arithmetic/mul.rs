use crate::error::ValueGradError;
use crate::node::{NodeData, Operation};
use crate::operand::{as_node, Operand};
use crate::value::Value;

// --- Backward Rule ---

/// Local gradients of `a * b`.
///
/// grad_a = grad_output * b, grad_b = grad_output * a
pub(crate) fn mul_backward(grad_output: f64, a: f64, b: f64) -> [f64; 2] {
    [grad_output * b, grad_output * a]
}

// --- Forward Operation ---

/// Builds `a * b`. Both values must already live in the same graph.
pub(crate) fn mul_nodes(a: &Value, b: &Value) -> Value {
    let graph = a.graph();
    let data = NodeData::from_op(a.value() * b.value(), Operation::Mul, vec![a.id(), b.id()]);
    let id = graph.push(data);
    Value::new(graph.clone(), id)
}

/// Multiplies `a` by a node or a number.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `b` is a node of a different graph.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Result<Value, ValueGradError> {
    let b = as_node(a.graph(), b)?;
    Ok(mul_nodes(a, &b))
}

/// Right-hand multiplication `lhs * a`. The resulting node lists `a` first.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `lhs` is a node of a different graph.
pub fn rmul_op(lhs: impl Into<Operand>, a: &Value) -> Result<Value, ValueGradError> {
    mul_op(a, lhs)
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
