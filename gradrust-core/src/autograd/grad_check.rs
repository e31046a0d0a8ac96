use crate::error::GradRustError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(GradRustError),
}

impl From<GradRustError> for GradCheckError {
    fn from(err: GradRustError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Compares the gradients produced by [`backward`](crate::autograd::backward) with
/// central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and must return the
/// scalar output. Every evaluation uses its own graph, so `func` never sees nodes from
/// an earlier evaluation.
///
/// A pair passes when the two gradients are within `tolerance` absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, GradRustError>,
{
    let evaluate = |point: &[f64]| -> Result<(Vec<Value>, Value), GradRustError> {
        let graph = Graph::new();
        let leaves: Vec<Value> = point.iter().map(|&x| graph.leaf(x)).collect();
        let output = func(&graph, &leaves)?;
        Ok((leaves, output))
    };

    let (leaves, output) = evaluate(inputs)?;
    output.backward()?;

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.try_grad()?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let loss_plus = evaluate(&shifted)?.1.try_data()?;
        shifted[input_index] = inputs[input_index] - epsilon;
        let loss_minus = evaluate(&shifted)?.1.try_data()?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}
