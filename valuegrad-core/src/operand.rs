//! Node-or-number operands and the coercion that turns them into graph nodes.

use crate::error::ValueGradError;
use crate::graph::Graph;
use crate::value::Value;
use log::debug;
use num_traits::ToPrimitive;

/// Either an existing graph node or a raw number.
///
/// Binary operations accept anything convertible into an `Operand` and call
/// [`as_node`] before building their result.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Scalar(f64),
}

impl Operand {
    /// Converts any primitive-like numeric type into a scalar operand.
    ///
    /// # Errors
    /// Returns [`ValueGradError::InvalidOperand`] if the number has no `f64`
    /// representation.
    pub fn from_number<N: ToPrimitive>(number: N) -> Result<Self, ValueGradError> {
        number.to_f64().map(Operand::Scalar).ok_or_else(|| {
            ValueGradError::invalid_operand("as_node", "number is not representable as f64")
        })
    }

    /// The raw number, if this operand is not a node.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(v) => Some(*v),
            Operand::Node(_) => None,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Scalar(f64::from(v))
                }
            }
        )*
    };
}

impl_scalar_operand!(f64, f32, i32, u32, i16, u16, i8, u8);

impl From<i64> for Operand {
    // i64 -> f64 rounds above 2^53, same as an `as` cast.
    fn from(v: i64) -> Self {
        Operand::Scalar(v as f64)
    }
}

/// Coerces an operand into a node of `graph`.
///
/// Scalars become fresh leaves. Nodes are returned unchanged when they belong to
/// `graph`; a node owned by another graph cannot be referenced from this arena.
///
/// # Errors
/// Returns [`ValueGradError::InvalidOperand`] for a node from a different graph.
pub fn as_node(graph: &Graph, operand: impl Into<Operand>) -> Result<Value, ValueGradError> {
    match operand.into() {
        Operand::Scalar(v) => Ok(graph.leaf(v)),
        Operand::Node(node) => {
            if node.graph().same_graph(graph) {
                Ok(node)
            } else {
                debug!("as_node: rejecting node {:?} from a different graph", node.id());
                Err(ValueGradError::invalid_operand(
                    "as_node",
                    "operand belongs to a different graph",
                ))
            }
        }
    }
}
