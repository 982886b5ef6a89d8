//! The arena that owns every node of one expression graph.

use crate::node::{NodeData, NodeId};
use crate::value::Value;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Owner of all nodes created while evaluating one family of expressions.
///
/// `Graph` is a shared handle: cloning it is O(1) and every clone sees the same
/// arena. Nodes are appended as a side effect of arithmetic on [`Value`]s and are
/// only dropped together with the last handle to the graph.
///
/// The arena uses interior mutability without locking, so a graph (and its values)
/// is confined to the thread that created it. Independent graphs may be built and
/// differentiated on separate threads.
#[derive(Clone, Default)]
pub struct Graph {
    nodes: Rc<RefCell<Vec<NodeData>>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node (no operands, zero gradient) holding `value`.
    pub fn leaf(&self, value: f64) -> Value {
        let id = self.push(NodeData::leaf(value));
        Value::new(self.clone(), id)
    }

    /// Creates a leaf node carrying a human-readable label for graph exporters.
    pub fn labeled_leaf(&self, value: f64, label: &str) -> Value {
        let mut data = NodeData::leaf(value);
        data.label = Some(label.to_string());
        let id = self.push(data);
        Value::new(self.clone(), id)
    }

    /// Returns a handle to the node with the given id, if this graph issued it.
    pub fn get(&self, id: NodeId) -> Option<Value> {
        if id.0 < self.len() {
            Some(Value::new(self.clone(), id))
        } else {
            None
        }
    }

    /// Number of nodes allocated so far (including intermediates and wrapped literals).
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        for node in self.nodes_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Returns `true` if both handles refer to the same arena.
    pub fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Appends a node and returns its id. Operands must already be in this arena.
    pub(crate) fn push(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes_mut();
        debug_assert!(data.operands.iter().all(|op| op.0 < nodes.len()));
        let id = NodeId(nodes.len());
        nodes.push(data);
        id
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<NodeData>> {
        self.nodes.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(nodes={})", self.len())
    }
}
