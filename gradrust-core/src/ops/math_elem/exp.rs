// gradrust-core/src/ops/math_elem/exp.rs

use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{deposit, unary_input, Upstream};
use crate::value::Value;

/// Computes `e^a`.
pub fn exp_op(a: &Value) -> Result<Value, GradRustError> {
    let x = unary_input(a)?;
    Ok(a.graph().record(x.exp(), Op::Exp(a.id())))
}

/// `d(e^a)/da = e^a`, which is the output value itself.
pub(crate) fn exp_backward(arena: &mut Arena, out: Upstream, a: NodeId) -> Result<(), GradRustError> {
    deposit(arena, a, out.value * out.grad, true)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
