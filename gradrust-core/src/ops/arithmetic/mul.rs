// gradrust-core/src/ops/arithmetic/mul.rs

use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{binary_inputs, deposit, Upstream};
use crate::value::Value;

/// Computes `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, GradRustError> {
    let (x, y) = binary_inputs(a, b, "mul")?;
    Ok(a.graph().record(x * y, Op::Mul(a.id(), b.id())))
}

/// `d(a * b)/da = b`, `d(a * b)/db = a`.
///
/// When `a` and `b` are the same node both writes land on it, giving `2 * a * grad`.
pub(crate) fn mul_backward(
    arena: &mut Arena,
    out: Upstream,
    a: NodeId,
    b: NodeId,
) -> Result<(), GradRustError> {
    let x = arena.value(a)?;
    let y = arena.value(b)?;
    deposit(arena, a, out.grad * y, false)?;
    deposit(arena, b, out.grad * x, false)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
