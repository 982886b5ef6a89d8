use crate::error::ValueGradError;
use crate::operand::{as_node, Operand};
use crate::ops::arithmetic::mul::mul_nodes;
use crate::ops::arithmetic::pow::pow_scalar;
use crate::value::Value;

// --- Forward Operation ---

/// Divides `a` by a node or a number, built as `a * b ** -1`.
///
/// Division by zero follows IEEE semantics (`inf` or `NaN`), no error is raised.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `b` is a node of a different graph.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Result<Value, ValueGradError> {
    let b = as_node(a.graph(), b)?;
    Ok(mul_nodes(a, &pow_scalar(&b, -1.0)))
}

/// Right-hand division `lhs / a`, built as `a ** -1 * lhs`.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `lhs` is a node of a different graph.
pub fn rdiv_op(lhs: impl Into<Operand>, a: &Value) -> Result<Value, ValueGradError> {
    let lhs = as_node(a.graph(), lhs)?;
    Ok(mul_nodes(&pow_scalar(a, -1.0), &lhs))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
