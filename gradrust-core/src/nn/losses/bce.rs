// gradrust-core/src/nn/losses/bce.rs

use crate::error::GradRustError;
use crate::nn::losses::{check_pairs, Reduction};
use crate::ops::{add_op, ln_op, mul_op, neg_op, sub_op};
use crate::value::Value;

/// Binary cross-entropy for predictions in `[0, 1]` against targets in `{0, 1}` (or soft
/// labels in between):
///
/// `-(t·ln p + (1 - t)·ln(1 - p))`
///
/// A prediction of exactly `0` or `1` hits `ln(0)`, which evaluates to the graph's
/// sentinel instead of `-inf`, so the loss stays finite.
#[derive(Debug, Clone, Default)]
pub struct BCELoss {
    reduction: Reduction,
}

impl BCELoss {
    pub fn new(reduction: Reduction) -> Self {
        BCELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, GradRustError> {
        check_pairs(predictions, targets, "BCELoss")?;
        let terms = predictions
            .iter()
            .zip(targets.iter())
            .map(|(p, &t)| {
                let one = p.constant(1.0);
                let log_p = ln_op(p)?;
                let log_not_p = ln_op(&sub_op(&one, p)?)?;
                let pos = mul_op(&p.constant(t), &log_p)?;
                let neg = mul_op(&p.constant(1.0 - t), &log_not_p)?;
                neg_op(&add_op(&pos, &neg)?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.reduction.apply(&terms)
    }
}

#[cfg(test)]
#[path = "bce_test.rs"]
mod tests;
