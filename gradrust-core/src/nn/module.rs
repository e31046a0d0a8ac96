use crate::error::GradRustError;
use crate::value::Value;
use std::fmt::Debug;

/// The base trait for all neural network modules (neurons, layers, containers,
/// activations).
///
/// Modules consume and produce sequences of scalar nodes. Their parameters are leaf
/// nodes living in the graph the module was created on, so a forward pass must be built
/// from inputs in that same graph.
pub trait Module: Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Returns
    /// The output nodes, or a `GradRustError` if the input does not fit the module
    /// (wrong length, foreign graph, discarded nodes).
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    /// Modules without parameters keep the default empty list.
    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Returns the parameters along with hierarchical names (e.g. `"0.3.weight.1"`).
    /// The default names parameters by position.
    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.parameters()
            .into_iter()
            .enumerate()
            .map(|(i, p)| (i.to_string(), p))
            .collect()
    }

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    // Mock Module pour les tests
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
            input.iter().map(|x| crate::ops::mul_op(x, &self.param)).collect()
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }
    }

    #[test]
    fn test_module_defaults() -> Result<(), GradRustError> {
        let graph = Graph::new();
        let module = MockModule {
            param: graph.leaf(2.0),
        };
        assert_eq!(module.num_parameters(), 1);
        let named = module.named_parameters();
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].0, "0");
        assert!(named[0].1.same_node(&module.param));
        Ok(())
    }

    #[test]
    fn test_module_zero_grad() -> Result<(), GradRustError> {
        let graph = Graph::new();
        let module = MockModule {
            param: graph.leaf(2.0),
        };
        let x = graph.leaf(3.0);
        let out = module.forward(&[x])?;
        out[0].backward()?;
        assert_eq!(module.param.grad(), 3.0);

        module.zero_grad();
        for p in module.parameters() {
            assert_eq!(p.grad(), 0.0);
        }
        Ok(())
    }
}
