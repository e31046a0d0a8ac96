// gradrust-core/src/ops/arithmetic/pow.rs

use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::ops::{deposit, unary_input, Upstream};
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Raises `a` to a constant real exponent.
///
/// The exponent is any primitive number; it is converted to `f64` up front.
///
/// # Errors
/// Returns `InvalidExponent` if the exponent cannot be represented as a finite `f64`
/// (NaN or infinite). Node exponents are not supported.
pub fn pow_op<E>(a: &Value, exponent: E) -> Result<Value, GradRustError>
where
    E: ToPrimitive + Debug,
{
    let p = exponent
        .to_f64()
        .filter(|p| p.is_finite())
        .ok_or_else(|| {
            GradRustError::InvalidExponent(format!("{:?} is not a finite real constant", exponent))
        })?;
    let x = unary_input(a)?;
    Ok(a.graph().record(x.powf(p), Op::Pow(a.id(), p)))
}

/// `d(a^p)/da = p * a^(p - 1)`, and `0` for `p == 0` (where `0^-1` would give NaN).
pub(crate) fn pow_backward(
    arena: &mut Arena,
    out: Upstream,
    a: NodeId,
    p: f64,
) -> Result<(), GradRustError> {
    let x = arena.value(a)?;
    let local = if p == 0.0 { 0.0 } else { p * x.powf(p - 1.0) };
    deposit(arena, a, local * out.grad, true)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
