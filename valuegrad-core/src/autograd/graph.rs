use crate::node::{NodeData, NodeId};
use crate::value::Value;
use log::trace;
use std::collections::HashSet;

/// Post-order DFS over operand links, pushing each node after all of its operands.
///
/// `visited` is keyed by node id, so a node reachable along several paths is
/// emitted once. The recursion is replaced by an explicit stack to keep deep
/// expression chains (long sums, unrolled loops) off the call stack.
pub(crate) fn build_topo(
    nodes: &[NodeData],
    root: NodeId,
    visited: &mut HashSet<NodeId>,
    sorted_list: &mut Vec<NodeId>,
) {
    // (node, operands already expanded)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((node_id, expanded)) = stack.pop() {
        if expanded {
            trace!("[build_topo] Adding node {:?} to sorted_list", node_id);
            sorted_list.push(node_id);
            continue;
        }
        if !visited.insert(node_id) {
            trace!("[build_topo] Node {:?} already visited.", node_id);
            continue;
        }
        stack.push((node_id, true));
        // Reverse so operands are finished in their declared order.
        for &operand in nodes[node_id.0].operands.iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }
}

/// Returns the ids of all nodes reachable from `root`, every node after its operands.
///
/// The root is always the last element.
pub(crate) fn topological_order(nodes: &[NodeData], root: NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(nodes, root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Orders the nodes reachable from `root` so that each node follows its operands.
///
/// Running the backward pass visits this sequence in reverse.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let graph = root.graph();
    let order = topological_order(&graph.nodes(), root.id());
    order
        .into_iter()
        .map(|id| Value::new(graph.clone(), id))
        .collect()
}

/// Nodes and operand edges reachable from a root, for graph exporters.
#[derive(Debug, Clone)]
pub struct GraphTrace {
    /// Reachable nodes in topological order (root last).
    pub nodes: Vec<Value>,
    /// `(operand, consumer)` pairs. An operand used twice by the same consumer
    /// (e.g. `x * x`) yields a single edge.
    pub edges: Vec<(Value, Value)>,
}

/// Collects the sub-graph reachable from `root`.
///
/// Each node exposes `value`, `grad`, `operation` and `label`, which is all a
/// renderer needs to draw value/gradient boxes and per-edge operation labels.
pub fn trace(root: &Value) -> GraphTrace {
    let graph = root.graph();
    let nodes = graph.nodes();
    let order = topological_order(&nodes, root.id());

    let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for &consumer in &order {
        for &operand in &nodes[consumer.0].operands {
            if seen_edges.insert((operand, consumer)) {
                edges.push((
                    Value::new(graph.clone(), operand),
                    Value::new(graph.clone(), consumer),
                ));
            }
        }
    }
    drop(nodes);

    GraphTrace {
        nodes: order
            .into_iter()
            .map(|id| Value::new(graph.clone(), id))
            .collect(),
        edges,
    }
}
