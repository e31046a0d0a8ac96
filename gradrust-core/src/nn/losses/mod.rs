pub mod bce;
pub mod mse;

pub use bce::BCELoss;
pub use mse::MSELoss;

use std::str::FromStr;

use crate::error::GradRustError;
use crate::ops::{mean_op, sum_op};
use crate::value::Value;

/// Specifies the reduction to apply to the per-element losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = GradRustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradRustError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl Reduction {
    pub(crate) fn apply(&self, terms: &[Value]) -> Result<Value, GradRustError> {
        match self {
            Reduction::Mean => mean_op(terms),
            Reduction::Sum => sum_op(terms),
        }
    }
}

/// Predictions and targets must pair up one-to-one and be non-empty.
pub(crate) fn check_pairs(
    predictions: &[Value],
    targets: &[f64],
    operation: &str,
) -> Result<(), GradRustError> {
    if predictions.len() != targets.len() {
        return Err(GradRustError::InputSizeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: operation.to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(GradRustError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}
