use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{deposit, unary_input, Upstream};
use crate::value::Value;

/// Rectified linear unit: `0` for negative inputs, the input otherwise.
pub fn relu_op(a: &Value) -> Result<Value, GradRustError> {
    let x = unary_input(a)?;
    let out = if x < 0.0 { 0.0 } else { x };
    Ok(a.graph().record(out, Op::Relu(a.id())))
}

/// Passes the gradient through where the output is strictly positive.
pub(crate) fn relu_backward(arena: &mut Arena, out: Upstream, a: NodeId) -> Result<(), GradRustError> {
    let gate = if out.value > 0.0 { 1.0 } else { 0.0 };
    deposit(arena, a, gate * out.grad, false)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
