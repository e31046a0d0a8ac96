// gradrust-core/src/ops/arithmetic/sub.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Computes `a - b` as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, GradRustError> {
    a.graph().check_owns(b, "sub")?;
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
