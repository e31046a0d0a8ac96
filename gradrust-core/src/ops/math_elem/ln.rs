// gradrust-core/src/ops/math_elem/ln.rs

use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{deposit, unary_input, Upstream};
use crate::value::Value;

/// Computes the natural logarithm of `a`.
///
/// # Domain Considerations
/// `ln(0)` does not produce `-inf`. It returns the graph's
/// [`log_zero_sentinel`](crate::config::GraphConfig::log_zero_sentinel) (`-100.0` by
/// default), and the local derivative at that point is taken to be `0`. This keeps loss
/// functions such as binary cross-entropy finite when a prediction saturates.
/// Negative inputs yield NaN.
pub fn ln_op(a: &Value) -> Result<Value, GradRustError> {
    let x = unary_input(a)?;
    let out = if x == 0.0 {
        a.graph().config().log_zero_sentinel
    } else {
        x.ln()
    };
    Ok(a.graph().record(out, Op::Log(a.id())))
}

/// `d(ln a)/da = 1 / a`, or `0` at the sentinel point `a == 0`.
pub(crate) fn ln_backward(arena: &mut Arena, out: Upstream, a: NodeId) -> Result<(), GradRustError> {
    let x = arena.value(a)?;
    let local = if x != 0.0 { x.recip() } else { 0.0 };
    deposit(arena, a, local * out.grad, true)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
