//! `std::ops` support for [`Value`].
//!
//! Every combination of `Value`, `&Value` and `f64` is covered, with `f64` allowed on
//! either side. A raw number becomes a constant leaf in the other operand's graph.
//!
//! # Panics
//! The operator forms panic when the named `_op` function would have returned an error:
//! operands from two different graphs, or a handle discarded by `Graph::rewind`.

use crate::error::GradRustError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn expect_node(result: Result<Value, GradRustError>, operation: &str) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Value {} failed: {}", operation, e),
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident, $name:literal) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                expect_node($op_fn(self, rhs), $name)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_node($op_fn(&self, &rhs), $name)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                expect_node($op_fn(&self, rhs), $name)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_node($op_fn(self, &rhs), $name)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                let rhs = self.constant(rhs);
                expect_node($op_fn(self, &rhs), $name)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                let rhs = self.constant(rhs);
                expect_node($op_fn(&self, &rhs), $name)
            }
        }

        impl<'b> $trait<&'b Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                let lhs = rhs.constant(self);
                expect_node($op_fn(&lhs, rhs), $name)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                let lhs = rhs.constant(self);
                expect_node($op_fn(&lhs, &rhs), $name)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op, "add");
impl_binary_operator!(Sub, sub, sub_op, "sub");
impl_binary_operator!(Mul, mul, mul_op, "mul");
impl_binary_operator!(Div, div, div_op, "div");

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_node(neg_op(self), "neg")
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_node(neg_op(&self), "neg")
    }
}

#[cfg(test)]
#[path = "overload_test.rs"]
mod tests;
