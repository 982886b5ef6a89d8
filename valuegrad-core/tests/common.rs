use valuegrad_core::{Graph, Value};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn leaves(graph: &Graph, values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Asserts that `earlier` appears before `later` in `order` (by node identity).
#[allow(dead_code)]
pub fn assert_precedes(order: &[Value], earlier: &Value, later: &Value) {
    let pos = |v: &Value| {
        order
            .iter()
            .position(|n| n.ptr_eq(v))
            .unwrap_or_else(|| panic!("node {:?} missing from order", v.id()))
    };
    assert!(
        pos(earlier) < pos(later),
        "expected {:?} before {:?}",
        earlier.id(),
        later.id()
    );
}
