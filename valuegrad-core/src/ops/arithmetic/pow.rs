use crate::error::ValueGradError;
use crate::node::{NodeData, Operation};
use crate::operand::Operand;
use crate::value::Value;

// --- Backward Rule ---

/// Local gradient of `base ** exponent` for a constant exponent.
///
/// grad_base = grad_output * exponent * base ** (exponent - 1)
pub(crate) fn pow_backward(grad_output: f64, base: f64, exponent: f64) -> f64 {
    grad_output * exponent * base.powf(exponent - 1.0)
}

// --- Forward Operation ---

/// Builds `base ** exponent`. Infallible: the exponent is already a number.
pub(crate) fn pow_scalar(base: &Value, exponent: f64) -> Value {
    let graph = base.graph();
    let data = NodeData::from_op(
        base.value().powf(exponent),
        Operation::Pow { exponent },
        vec![base.id()],
    );
    let id = graph.push(data);
    Value::new(graph.clone(), id)
}

/// Raises `base` to a fixed numeric power.
///
/// The exponent is stored on the node, not as an operand, so it never receives a
/// gradient.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] if `exponent` is a graph node.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, ValueGradError> {
    match exponent.into() {
        Operand::Scalar(p) => Ok(pow_scalar(base, p)),
        Operand::Node(node) => {
            log::debug!("pow_op: rejecting node {:?} as exponent", node.id());
            Err(ValueGradError::invalid_operand(
                "pow",
                "exponent must be a plain number, not a graph node",
            ))
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
