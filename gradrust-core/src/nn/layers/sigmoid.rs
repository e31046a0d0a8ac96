use crate::error::GradRustError;
use crate::nn::module::Module;
use crate::ops::sigmoid_op;
use crate::value::Value;

/// Layer that applies the logistic sigmoid element-wise. No parameters.
#[derive(Debug, Default, Clone)]
pub struct Sigmoid {}

impl Sigmoid {
    pub fn new() -> Self {
        Sigmoid {}
    }
}

impl Module for Sigmoid {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        input.iter().map(sigmoid_op).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::nn::ReLU;
    use approx::assert_relative_eq;

    #[test]
    fn test_activations_are_elementwise() -> Result<(), GradRustError> {
        let graph = Graph::new();
        let input: Vec<Value> = [-2.0, 0.0, 3.0].iter().map(|&v| graph.leaf(v)).collect();

        let relu_out = ReLU::new().forward(&input)?;
        let sig_out = Sigmoid::new().forward(&input)?;
        assert_eq!(relu_out.len(), 3);
        assert_eq!(sig_out.len(), 3);

        let relu_data: Vec<f64> = relu_out.iter().map(|v| v.data()).collect();
        assert_eq!(relu_data, vec![0.0, 0.0, 3.0]);
        assert_relative_eq!(sig_out[1].data(), 0.5);
        assert!(ReLU::new().parameters().is_empty());
        assert!(Sigmoid::new().parameters().is_empty());
        Ok(())
    }

    #[test]
    fn test_activation_outputs_are_new_nodes() -> Result<(), GradRustError> {
        let graph = Graph::new();
        let x = graph.leaf(1.0);
        let out = ReLU::new().forward(std::slice::from_ref(&x))?;
        assert!(!out[0].same_node(&x));
        out[0].backward()?;
        assert_eq!(x.grad(), 1.0);
        Ok(())
    }
}
