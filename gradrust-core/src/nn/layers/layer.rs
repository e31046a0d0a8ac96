use crate::error::GradRustError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_output` independent neurons over the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_input: usize,
}

impl Layer {
    pub fn new(graph: &Graph, n_input: usize, n_output: usize) -> Result<Self, GradRustError> {
        Self::with_rng(graph, n_input, n_output, &Init::default(), &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        n_input: usize,
        n_output: usize,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, GradRustError> {
        let neurons = (0..n_output)
            .map(|_| Neuron::with_rng(graph, n_input, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_input })
    }

    /// Builds a layer from existing neurons, which must all take `n_input` inputs.
    pub fn from_neurons(n_input: usize, neurons: Vec<Neuron>) -> Result<Self, GradRustError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_input() != n_input) {
            return Err(GradRustError::InputSizeMismatch {
                expected: n_input,
                actual: bad.n_input(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, n_input })
    }

    pub fn n_input(&self) -> usize {
        self.n_input
    }

    pub fn n_output(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        if input.len() != self.n_input {
            return Err(GradRustError::InputSizeMismatch {
                expected: self.n_input,
                actual: input.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            for (name, p) in neuron.named_parameters() {
                params.push((format!("{}.{}", j, name), p));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
