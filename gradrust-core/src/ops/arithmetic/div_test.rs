use super::*;
use crate::autograd::grad_check::check_grad;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let a = graph.leaf(6.0);
    let b = graph.leaf(4.0);
    let c = div_op(&a, &b)?;
    assert_relative_eq!(c.data(), 1.5);
    c.backward()?;
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -6.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_matches_direct_division() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let pairs = [(1.0, 3.0), (-7.25, 0.1), (1e6, -3.3), (0.0, 2.0), (2.0, 1e-8)];
    for (x, y) in pairs {
        let a = graph.leaf(x);
        let b = graph.leaf(y);
        let c = div_op(&a, &b)?;
        assert_relative_eq!(c.data(), x / y, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn test_div_by_zero_is_not_an_error() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(0.0);
    let c = div_op(&a, &b)?;
    assert!(c.data().is_infinite());
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(
        |_, inputs| div_op(&inputs[0], &inputs[1]),
        &[2.0, -1.7],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "Gradient check failed: {:?}", result.err());
}
