//! Core data structures for one entry of the computation graph.
//!
//! Nodes live in the arena of a [`Graph`](crate::graph::Graph) and refer to their
//! operands by [`NodeId`], never by owning pointers. Sharing a sub-expression is
//! therefore just storing the same id twice.

use std::fmt;

/// Index of a node inside its graph's arena.
///
/// Ids are only meaningful together with the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena (creation order).
    pub fn index(self) -> usize {
        self.0
    }
}

/// The operation that produced a node.
///
/// Subtraction, negation and division are not primitive: they are built from
/// `Add`, `Mul` and `Pow` and leave the corresponding nodes in the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Input node, no operands.
    Leaf,
    /// operands[0] + operands[1]
    Add,
    /// operands[0] * operands[1]
    Mul,
    /// operands[0] ** exponent, with a fixed numeric exponent.
    Pow { exponent: f64 },
}

impl Operation {
    /// Short symbol used when printing or exporting the graph (`""` for leaves).
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Leaf => "",
            Operation::Add => "+",
            Operation::Mul => "*",
            Operation::Pow { .. } => "**",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::Leaf)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Internal record stored in the arena for every node.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    /// Forward-computed result.
    pub(crate) value: f64,
    /// d(root)/d(this), accumulated during backward.
    pub(crate) grad: f64,
    /// Operands in the order the operation received them. Written once.
    pub(crate) operands: Vec<NodeId>,
    pub(crate) operation: Operation,
    /// Cosmetic name, only read by graph exporters.
    pub(crate) label: Option<String>,
}

impl NodeData {
    pub(crate) fn leaf(value: f64) -> Self {
        NodeData {
            value,
            grad: 0.0,
            operands: Vec::new(),
            operation: Operation::Leaf,
            label: None,
        }
    }

    pub(crate) fn from_op(value: f64, operation: Operation, operands: Vec<NodeId>) -> Self {
        NodeData {
            value,
            grad: 0.0,
            operands,
            operation,
            label: None,
        }
    }
}
