use crate::error::ValueGradError;
use crate::operand::{as_node, Operand};
use crate::ops::arithmetic::add::add_nodes;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

// --- Forward Operation ---

/// Subtracts a node or a number from `a`, built as `a + (-b)`.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `b` is a node of a different graph.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Result<Value, ValueGradError> {
    let b = as_node(a.graph(), b)?;
    Ok(add_nodes(a, &neg_op(&b)))
}

/// Right-hand subtraction `lhs - a`, built as `(-a) + lhs`.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `lhs` is a node of a different graph.
pub fn rsub_op(lhs: impl Into<Operand>, a: &Value) -> Result<Value, ValueGradError> {
    let lhs = as_node(a.graph(), lhs)?;
    Ok(add_nodes(&neg_op(a), &lhs))
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
