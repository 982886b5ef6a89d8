use crate::error::ValueGradError;
use crate::node::{NodeData, Operation};
use crate::operand::{as_node, Operand};
use crate::value::Value;

// --- Backward Rule ---

/// Local gradients of `a + b`: both operands receive the output gradient unchanged.
pub(crate) fn add_backward(grad_output: f64) -> [f64; 2] {
    [grad_output, grad_output]
}

// --- Forward Operation ---

/// Builds `a + b`. Both values must already live in the same graph.
pub(crate) fn add_nodes(a: &Value, b: &Value) -> Value {
    let graph = a.graph();
    let data = NodeData::from_op(a.value() + b.value(), Operation::Add, vec![a.id(), b.id()]);
    let id = graph.push(data);
    Value::new(graph.clone(), id)
}

/// Adds a node or a number to `a`.
///
/// A numeric `b` is wrapped into a new leaf of `a`'s graph first.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `b` is a node of a different graph.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Result<Value, ValueGradError> {
    let b = as_node(a.graph(), b)?;
    Ok(add_nodes(a, &b))
}

/// Right-hand addition `lhs + a`. The resulting node lists `a` first, then `lhs`.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `lhs` is a node of a different graph.
pub fn radd_op(lhs: impl Into<Operand>, a: &Value) -> Result<Value, ValueGradError> {
    add_op(a, lhs)
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
