use crate::error::GradRustError;
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// Arithmetic mean of a non-empty slice, as `sum * (1 / n)`.
pub fn mean_op(values: &[Value]) -> Result<Value, GradRustError> {
    let total = sum_op(values)?;
    let scale = total.constant(1.0 / values.len() as f64);
    mul_op(&total, &scale)
}
