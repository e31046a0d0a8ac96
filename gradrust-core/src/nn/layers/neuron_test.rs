use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_creation() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let neuron = Neuron::new(&graph, 4)?;
    assert_eq!(neuron.n_input(), 4);
    assert_eq!(neuron.parameters().len(), 5);
    assert_eq!(graph.len(), 5);
    for p in neuron.parameters() {
        assert!(p.is_leaf());
        assert!((-1.0..1.0).contains(&p.data()));
    }
    Ok(())
}

#[test]
fn test_neuron_seeded_creation_is_reproducible() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let init = Init::default();
    let a = Neuron::with_rng(&graph, 3, &init, &mut StdRng::seed_from_u64(9))?;
    let b = Neuron::with_rng(&graph, 3, &init, &mut StdRng::seed_from_u64(9))?;
    let a_data: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
    let b_data: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(a_data, b_data);
    Ok(())
}

#[test]
fn test_neuron_forward_and_backward() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let neuron = Neuron::from_weights(&graph, &[0.5, -1.0], 0.25);
    let x: Vec<Value> = [2.0, 3.0].iter().map(|&v| graph.leaf(v)).collect();
    let out = neuron.activate(&x)?;
    // 0.25 + 0.5*2 - 1*3
    assert_relative_eq!(out.data(), -1.75);

    out.backward()?;
    check_grads_near(neuron.weights(), &[2.0, 3.0], 1e-12);
    assert_relative_eq!(neuron.bias().grad(), 1.0);
    check_grads_near(&x, &[0.5, -1.0], 1e-12);
    Ok(())
}

#[test]
fn test_neuron_input_size_mismatch() {
    let graph = Graph::new();
    let neuron = Neuron::from_weights(&graph, &[1.0, 1.0, 1.0], 0.0);
    let x = vec![graph.leaf(1.0)];
    assert_eq!(
        neuron.forward(&x).err(),
        Some(GradRustError::InputSizeMismatch {
            expected: 3,
            actual: 1,
            operation: "Neuron::activate".to_string()
        })
    );
}

#[test]
fn test_neuron_named_parameters() {
    let graph = Graph::new();
    let neuron = Neuron::from_weights(&graph, &[1.0, 2.0], 3.0);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
}

#[test]
fn test_neuron_grad_check() {
    // Inputs: w0, w1, b; fixed data point (1.5, -0.5).
    let result = check_grad(
        |graph, p| {
            let x0 = graph.leaf(1.5);
            let x1 = graph.leaf(-0.5);
            let neuron = Neuron {
                weights: vec![p[0].clone(), p[1].clone()],
                bias: p[2].clone(),
            };
            neuron.activate(&[x0, x1])?.sigmoid()
        },
        &[0.3, -0.8, 0.1],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "Gradient check failed: {:?}", result.err());
}
