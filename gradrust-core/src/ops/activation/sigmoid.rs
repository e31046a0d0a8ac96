use crate::error::GradRustError;
use crate::ops::arithmetic::{add_op, div_op};
use crate::ops::math_elem::exp_op;
use crate::value::Value;

/// Logistic sigmoid, built as `e^a / (e^a + 1)`.
///
/// No dedicated rule: the gradient flows through the `exp`, `add`, `pow` and `mul`
/// nodes of the composition. The single `exp` node is reached along two paths and
/// relies on accumulation.
pub fn sigmoid_op(a: &Value) -> Result<Value, GradRustError> {
    let e = exp_op(a)?;
    let one = a.constant(1.0);
    let denom = add_op(&e, &one)?;
    div_op(&e, &denom)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
