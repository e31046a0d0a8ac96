// gradrust-core/src/ops/arithmetic/div.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b^-1`.
///
/// Division by a zero-valued node follows IEEE semantics (`inf` or NaN); it is not an
/// error.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, GradRustError> {
    a.graph().check_owns(b, "div")?;
    let inv_b = pow_op(b, -1.0)?;
    mul_op(a, &inv_b)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
