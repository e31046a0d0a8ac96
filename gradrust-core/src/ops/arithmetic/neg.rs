// gradrust-core/src/ops/arithmetic/neg.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * -1`.
pub fn neg_op(a: &Value) -> Result<Value, GradRustError> {
    let minus_one = a.constant(-1.0);
    mul_op(a, &minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
