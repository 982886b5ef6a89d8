//! # Value Operations Module (`ops`)
//!
//! Arithmetic on [`Value`](crate::value::Value) nodes. Each operation builds its result
//! node in the operands' graph and records enough to run the backward pass.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** [`arithmetic`] exposes one fallible function per operation
//!   (`add_op`, `mul_op`, `pow_op`, ...) plus right-hand forms (`radd_op`, `rdiv_op`, ...)
//!   for a literal on the left. Numbers are wrapped into leaves by
//!   [`as_node`](crate::operand::as_node).
//! - **Primitives vs composites:** only `add`, `mul` and `pow` create tagged nodes and own
//!   a backward rule. `neg`, `sub` and `div` are compositions of those.
//! - **Operators:** [`overload`] maps `+ - * /` and unary `-` onto the `_op` functions.

pub mod arithmetic;
pub mod overload;

pub use arithmetic::{
    add_op, div_op, mul_op, neg_op, pow_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
