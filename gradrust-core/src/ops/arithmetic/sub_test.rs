use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_and_backward() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(3.5);
    let c = sub_op(&a, &b)?;
    assert_relative_eq!(c.data(), 1.5);
    c.backward()?;
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let x = graph.leaf(7.0);
    let y = sub_op(&x, &x)?;
    y.backward()?;
    assert_relative_eq!(y.data(), 0.0);
    assert_relative_eq!(x.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sub_graph_mismatch() {
    let a = Graph::new().leaf(1.0);
    let b = Graph::new().leaf(1.0);
    assert!(matches!(
        sub_op(&a, &b),
        Err(GradRustError::GraphMismatch { .. })
    ));
}
