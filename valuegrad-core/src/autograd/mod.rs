//! Reverse-mode differentiation over the scalar graph.
//!
//! - [`graph`]: topological ordering of the nodes reachable from a root, and
//!   [`trace`](graph::trace) for exporters that draw the graph.
//! - `backward`: the driver behind [`Value::backward`](crate::value::Value::backward).
//! - [`grad_check`]: finite-difference verification of computed gradients.

pub(crate) mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, numerical_grad, GradCheckConfig, GradCheckError};
pub use graph::{topological_sort, trace, GraphTrace};
