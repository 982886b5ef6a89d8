//! `Value`: the user-facing handle to one scalar node.

use crate::error::ValueGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operation};
use crate::operand::Operand;
use std::fmt;

/// A differentiable scalar in a computation graph.
///
/// `Value` pairs a [`Graph`] handle with the [`NodeId`] of a node in it. Cloning is
/// cheap and yields a second handle to the *same* node; arithmetic on values appends
/// new nodes to the graph and never modifies existing ones (apart from `grad`).
///
/// Identity, not numeric equality, distinguishes nodes: two leaves created with the
/// same number are different graph entries. Use [`Value::ptr_eq`] to compare handles.
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
}

impl Value {
    pub(crate) fn new(graph: Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// Id of the node inside its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph that owns this node.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Forward-computed value.
    pub fn value(&self) -> f64 {
        self.graph.nodes()[self.id.0].value
    }

    /// Gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.graph.nodes()[self.id.0].grad
    }

    /// The operation that produced this node.
    pub fn operation(&self) -> Operation {
        self.graph.nodes()[self.id.0].operation
    }

    /// Handles to the operands, in the order the operation received them.
    ///
    /// A node built from the same operand twice (e.g. `x * x`) lists it twice.
    pub fn operands(&self) -> Vec<Value> {
        self.graph.nodes()[self.id.0]
            .operands
            .iter()
            .map(|&id| Value::new(self.graph.clone(), id))
            .collect()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.nodes()[self.id.0].label.clone()
    }

    /// Attaches a cosmetic label. Labels never influence values or gradients.
    pub fn set_label(&self, label: &str) {
        self.graph.nodes_mut()[self.id.0].label = Some(label.to_string());
    }

    /// Builder form of [`Value::set_label`].
    pub fn with_label(self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.operation().is_leaf()
    }

    /// Returns `true` if both handles point at the same node of the same graph.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        self.id == other.id && self.graph.same_graph(&other.graph)
    }

    /// Raises this node to a fixed numeric power.
    pub fn powf(&self, exponent: f64) -> Value {
        crate::ops::arithmetic::pow::pow_scalar(self, exponent)
    }

    /// Raises this node to `exponent`, which must be a plain number.
    ///
    /// # Errors
    /// Returns [`ValueGradError::InvalidOperand`] if `exponent` is a graph node.
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Value, ValueGradError> {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// Computes d(self)/d(node) for every node reachable from `self`.
    ///
    /// Reachable gradients are reset to zero first, so calling `backward` twice
    /// yields the same gradients both times. Gradients of nodes that are not
    /// reachable from `self` are left untouched.
    pub fn backward(&self) {
        crate::autograd::backward::backward(self)
    }

    /// Resets the gradient of this node and every node reachable from it.
    pub fn zero_grad(&self) {
        crate::autograd::backward::zero_reachable_grads(self)
    }
}

impl fmt::Display for Value {
    /// `Value: 4` for leaves, `Value: 4 Created by + applied to [-6, 10]` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let node = &nodes[self.id.0];
        write!(f, "Value: {}", node.value)?;
        if node.operands.is_empty() {
            return Ok(());
        }
        write!(f, " Created by {} applied to [", node.operation)?;
        for (i, operand) in node.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", nodes[operand.0].value)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let node = &nodes[self.id.0];
        f.debug_struct("Value")
            .field("id", &self.id.0)
            .field("value", &node.value)
            .field("grad", &node.grad)
            .field("operation", &node.operation)
            .field("operands", &node.operands.iter().map(|id| id.0).collect::<Vec<_>>())
            .field("label", &node.label)
            .finish()
    }
}
