use crate::error::GradRustError;
use crate::ops::arithmetic::add_op;
use crate::value::Value;

/// Sums a non-empty slice of values as a left-leaning chain of `add` nodes.
///
/// # Errors
/// `EmptyInput` for an empty slice, since there is no graph to place a zero in.
pub fn sum_op(values: &[Value]) -> Result<Value, GradRustError> {
    let (first, rest) = values.split_first().ok_or_else(|| GradRustError::EmptyInput {
        operation: "sum".to_string(),
    })?;
    rest.iter().try_fold(first.clone(), |acc, v| add_op(&acc, v))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
