// gradrust-core/src/ops/arithmetic/add.rs

use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{binary_inputs, deposit, Upstream};
use crate::value::Value;

/// Computes `a + b`.
///
/// # Errors
/// `GraphMismatch` if the operands live in different graphs, `StaleNode` if either was
/// discarded.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, GradRustError> {
    let (x, y) = binary_inputs(a, b, "add")?;
    Ok(a.graph().record(x + y, Op::Add(a.id(), b.id())))
}

/// `d(a + b)/da = d(a + b)/db = 1`.
pub(crate) fn add_backward(
    arena: &mut Arena,
    out: Upstream,
    a: NodeId,
    b: NodeId,
) -> Result<(), GradRustError> {
    deposit(arena, a, out.grad, false)?;
    deposit(arena, b, out.grad, false)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
