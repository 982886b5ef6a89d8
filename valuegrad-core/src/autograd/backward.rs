//! The backward pass: reset, seed, order, propagate.

use crate::autograd::graph::topological_order;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::value::Value;
use log::{debug, trace};

/// Pushes the gradient of `node_id` into its operands according to its operation.
///
/// Contributions are *added* to the operands' gradients, so a node consumed by
/// several downstream nodes (or twice by the same one) receives their sum.
fn propagate(nodes: &mut [NodeData], node_id: NodeId) {
    let node = &nodes[node_id.0];
    let grad_output = node.grad;
    let operation = node.operation;
    match operation {
        Operation::Leaf => {}
        Operation::Add => {
            let (a, b) = (node.operands[0], node.operands[1]);
            let [grad_a, grad_b] = add_backward(grad_output);
            nodes[a.0].grad += grad_a;
            nodes[b.0].grad += grad_b;
        }
        Operation::Mul => {
            let (a, b) = (node.operands[0], node.operands[1]);
            let [grad_a, grad_b] = mul_backward(grad_output, nodes[a.0].value, nodes[b.0].value);
            nodes[a.0].grad += grad_a;
            nodes[b.0].grad += grad_b;
        }
        Operation::Pow { exponent } => {
            let base = node.operands[0];
            let grad_base = pow_backward(grad_output, nodes[base.0].value, exponent);
            nodes[base.0].grad += grad_base;
        }
    }
}

/// Computes d(root)/d(node) for every node reachable from `root`.
///
/// 1. Topologically order the reachable nodes.
/// 2. Reset their gradients to 0.
/// 3. Seed `root.grad = 1`.
/// 4. Walk the order in reverse, propagating each node's gradient to its operands.
///
/// Nodes outside the reachable sub-graph are not touched.
pub(crate) fn backward(root: &Value) {
    let mut nodes = root.graph().nodes_mut();
    let sorted_nodes = topological_order(&nodes, root.id());
    debug!(
        "backward: {} nodes reachable from root {:?}",
        sorted_nodes.len(),
        root.id()
    );

    for &node_id in &sorted_nodes {
        nodes[node_id.0].grad = 0.0;
    }
    nodes[root.id().0].grad = 1.0;

    for &node_id in sorted_nodes.iter().rev() {
        trace!(
            "backward: propagating grad {} from node {:?} ({})",
            nodes[node_id.0].grad,
            node_id,
            nodes[node_id.0].operation
        );
        propagate(&mut nodes, node_id);
    }
    debug!("backward: done for root {:?}", root.id());
}

/// Resets the gradients of `root` and every node reachable from it.
pub(crate) fn zero_reachable_grads(root: &Value) {
    let mut nodes = root.graph().nodes_mut();
    for node_id in topological_order(&nodes, root.id()) {
        nodes[node_id.0].grad = 0.0;
    }
}
