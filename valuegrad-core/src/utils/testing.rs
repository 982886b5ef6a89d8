use crate::value::Value;

/// Checks that a node's value and gradient are both within `tolerance` of the
/// expected numbers.
/// Panics with the offending field otherwise.
pub fn check_value_near(actual: &Value, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch for node {:?}: actual={:?}, expected={:?}, tolerance={:?}",
            actual.id(),
            value,
            expected_value,
            tolerance
        );
    }
    let grad = actual.grad();
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch for node {:?}: actual={:?}, expected={:?}, tolerance={:?}",
            actual.id(),
            grad,
            expected_grad,
            tolerance
        );
    }
}
