//! # valuegrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Value`]s builds a directed acyclic graph inside a [`Graph`] arena.
//! [`Value::backward`] then walks that graph in reverse topological order and
//! accumulates d(root)/d(node) into every reachable node's gradient.
//!
//! ```
//! use valuegrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.labeled_leaf(2.0, "a");
//! let b = graph.labeled_leaf(-3.0, "b");
//! let c = graph.labeled_leaf(10.0, "c");
//! let e = &a * &b;
//! let f = &e + &c;
//! let loss = &f * 2.0;
//! assert_eq!(loss.value(), 8.0);
//!
//! loss.backward();
//! assert_eq!(a.grad(), -6.0);
//! assert_eq!(b.grad(), 4.0);
//! assert_eq!(c.grad(), 2.0);
//! ```
//!
//! Only `+`, `*` and `**` (constant exponent) are primitive nodes; `-`, unary `-` and
//! `/` are composed from them. Every operator has a fallible `_op` counterpart in
//! [`ops`] that returns [`ValueGradError::InvalidOperand`] instead of panicking.

// Core graph structures
pub mod graph;
pub mod node;
pub mod operand;
pub mod value;

pub mod autograd;
pub mod ops;
pub mod utils;

pub mod error;

pub use error::ValueGradError;
pub use graph::Graph;
pub use node::{NodeId, Operation};
pub use operand::{as_node, Operand};
pub use value::Value;

pub use autograd::{check_grad, numerical_grad, topological_sort, trace, GradCheckConfig};
// Re-export traits required by public functions
pub use num_traits;
