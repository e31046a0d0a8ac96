use crate::error::GradRustError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::{add_op, mul_op};
use crate::value::Value;
use rand::Rng;

/// A single affine unit: `bias + Σ wᵢ·xᵢ`. No activation is applied; stack a
/// [`ReLU`](crate::nn::ReLU) or [`Sigmoid`](crate::nn::Sigmoid) after it.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `n_input` weights, all parameters drawn uniformly from
    /// `[-1, 1)` with the thread-local RNG.
    pub fn new(graph: &Graph, n_input: usize) -> Result<Self, GradRustError> {
        Self::with_rng(graph, n_input, &Init::default(), &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        n_input: usize,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, GradRustError> {
        let mut samples = init.sample(n_input + 1, rng)?;
        let bias = samples.pop().ok_or_else(|| {
            GradRustError::InternalError("init returned no sample for the bias".to_string())
        })?;
        Ok(Self::from_weights(graph, &samples, bias))
    }

    /// Creates a neuron with explicit parameter values.
    pub fn from_weights(graph: &Graph, weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| graph.leaf(w)).collect(),
            bias: graph.leaf(bias),
        }
    }

    pub fn n_input(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the neuron output for one input vector.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `input.len() != n_input`.
    pub fn activate(&self, input: &[Value]) -> Result<Value, GradRustError> {
        if input.len() != self.weights.len() {
            return Err(GradRustError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        input
            .iter()
            .zip(self.weights.iter())
            .try_fold(self.bias.clone(), |acc, (x, w)| {
                let wx = mul_op(x, w)?;
                add_op(&acc, &wx)
            })
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
