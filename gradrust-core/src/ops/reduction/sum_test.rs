use super::*;
use crate::graph::Graph;
use crate::ops::reduction::mean_op;
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;

#[test]
fn test_sum_forward_and_backward() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let values: Vec<Value> = [1.0, -2.0, 3.5].iter().map(|&v| graph.leaf(v)).collect();
    let total = sum_op(&values)?;
    assert_relative_eq!(total.data(), 2.5);
    total.backward()?;
    check_grads_near(&values, &[1.0, 1.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn test_sum_single_value_is_identity() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let x = graph.leaf(4.0);
    let total = sum_op(std::slice::from_ref(&x))?;
    assert!(total.same_node(&x));
    Ok(())
}

#[test]
fn test_sum_empty() {
    assert_eq!(
        sum_op(&[]).err(),
        Some(GradRustError::EmptyInput {
            operation: "sum".to_string()
        })
    );
}

#[test]
fn test_mean_forward_and_backward() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let values: Vec<Value> = [2.0, 4.0, 9.0, 1.0].iter().map(|&v| graph.leaf(v)).collect();
    let mean = mean_op(&values)?;
    assert_relative_eq!(mean.data(), 4.0);
    mean.backward()?;
    check_grads_near(&values, &[0.25; 4], 1e-12);
    Ok(())
}
