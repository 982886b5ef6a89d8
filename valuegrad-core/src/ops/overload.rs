//! `std::ops` operators for [`Value`].
//!
//! Every operator forwards to the fallible `*_op` function of the same name.
//! The only error those can raise through operators is combining values from two
//! different graphs, which is a programming error, so the operators panic on it.
//! Use the `*_op` functions directly to handle it as a `Result`.

use crate::error::ValueGradError;
use crate::ops::arithmetic::{
    add_op, div_op, mul_op, neg_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn unwrap_same_graph(result: Result<Value, ValueGradError>) -> Value {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// Value (owned or borrowed) on the left, Value or f64 on the right.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident, $rop_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                unwrap_same_graph($op_fn(self, rhs))
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                unwrap_same_graph($op_fn(self, rhs))
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                unwrap_same_graph($op_fn(&self, rhs))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                unwrap_same_graph($op_fn(&self, rhs))
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                unwrap_same_graph($op_fn(self, rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                unwrap_same_graph($op_fn(&self, rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                unwrap_same_graph($rop_fn(self, rhs))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                unwrap_same_graph($rop_fn(self, &rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, radd_op);
impl_binary_op!(Sub, sub, sub_op, rsub_op);
impl_binary_op!(Mul, mul, mul_op, rmul_op);
impl_binary_op!(Div, div, div_op, rdiv_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_forms_agree() {
        let graph = Graph::new();
        let a = graph.leaf(6.0);
        let b = graph.leaf(4.0);

        assert_relative_eq!((&a + &b).value(), 10.0);
        assert_relative_eq!((a.clone() - &b).value(), 2.0);
        assert_relative_eq!((&a * b.clone()).value(), 24.0);
        assert_relative_eq!((a.clone() / b.clone()).value(), 1.5);
        assert_relative_eq!((-&a).value(), -6.0);
        assert_relative_eq!((-a.clone()).value(), -6.0);
    }

    #[test]
    fn test_literal_on_either_side() {
        let graph = Graph::new();
        let a = graph.leaf(4.0);

        assert_relative_eq!((&a + 1.0).value(), 5.0);
        assert_relative_eq!((1.0 + &a).value(), 5.0);
        assert_relative_eq!((&a - 1.0).value(), 3.0);
        assert_relative_eq!((1.0 - &a).value(), -3.0);
        assert_relative_eq!((&a * 3.0).value(), 12.0);
        assert_relative_eq!((3.0 * a.clone()).value(), 12.0);
        assert_relative_eq!((a.clone() / 8.0).value(), 0.5);
        assert_relative_eq!((8.0 / &a).value(), 2.0);
    }

    #[test]
    #[should_panic(expected = "different graph")]
    fn test_mixing_graphs_panics() {
        let a = Graph::new().leaf(1.0);
        let b = Graph::new().leaf(2.0);
        let _ = &a + &b;
    }
}
