use super::*;
use crate::graph::Graph;
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;

#[test]
fn test_mse_mean() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let preds: Vec<Value> = [1.0, 2.0, 4.0].iter().map(|&v| graph.leaf(v)).collect();
    let loss = MSELoss::default().calculate(&preds, &[1.0, 0.0, 1.0])?;
    // (0 + 4 + 9) / 3
    assert_relative_eq!(loss.data(), 13.0 / 3.0, epsilon = 1e-12);

    loss.backward()?;
    // 2 (p - t) / n
    check_grads_near(&preds, &[0.0, 4.0 / 3.0, 2.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_sum() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let preds = vec![graph.leaf(3.0), graph.leaf(-1.0)];
    let loss = MSELoss::new(Reduction::Sum).calculate(&preds, &[1.0, 1.0])?;
    assert_relative_eq!(loss.data(), 8.0);
    loss.backward()?;
    check_grads_near(&preds, &[4.0, -4.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_length_mismatch() {
    let graph = Graph::new();
    let preds = vec![graph.leaf(1.0)];
    let result = MSELoss::default().calculate(&preds, &[1.0, 2.0]);
    assert!(matches!(
        result,
        Err(GradRustError::InputSizeMismatch { expected: 1, actual: 2, .. })
    ));
}

#[test]
fn test_mse_empty() {
    let result = MSELoss::default().calculate(&[], &[]);
    assert!(matches!(result, Err(GradRustError::EmptyInput { .. })));
}

#[test]
fn test_reduction_from_str() -> Result<(), GradRustError> {
    assert_eq!("Mean".parse::<Reduction>()?, Reduction::Mean);
    assert_eq!("sum".parse::<Reduction>()?, Reduction::Sum);
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(GradRustError::InvalidConfig(_))
    ));
    Ok(())
}
