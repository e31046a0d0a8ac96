// gradrust-core/src/nn/losses/mse.rs

use crate::error::GradRustError;
use crate::nn::losses::{check_pairs, Reduction};
use crate::ops::{pow_op, sub_op};
use crate::value::Value;

/// Mean Squared Error between predictions and constant targets.
///
/// Computes `(pᵢ - tᵢ)²` per element, then reduces with `reduction` (mean by default).
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node. Targets become constant leaves in the predictions' graph.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the slices differ in length, `EmptyInput` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, GradRustError> {
        check_pairs(predictions, targets, "MSELoss")?;
        let squared = predictions
            .iter()
            .zip(targets.iter())
            .map(|(p, &t)| {
                let target = p.constant(t);
                let diff = sub_op(p, &target)?;
                pow_op(&diff, 2)
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.reduction.apply(&squared)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
