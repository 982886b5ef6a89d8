use thiserror::Error;

/// Custom error type for the valuegrad engine.
///
/// Graph construction has a single failure mode: an operand that cannot be
/// interpreted by the operation receiving it. A failed operation never attaches
/// a node to the graph, so there is nothing to clean up on the error path.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ValueGradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand {
        operation: String,
        reason: String,
    },
}

impl ValueGradError {
    pub(crate) fn invalid_operand(operation: &str, reason: impl Into<String>) -> Self {
        ValueGradError::InvalidOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
