use crate::ops::arithmetic::mul::mul_nodes;
use crate::value::Value;

// --- Forward Operation ---

/// Negates `a`, built as `a * -1`.
///
/// Adds two nodes to the graph: the `-1` leaf and the product.
pub fn neg_op(a: &Value) -> Value {
    let minus_one = a.graph().leaf(-1.0);
    mul_nodes(a, &minus_one)
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
