use gradrust_core::{GradRustError, Value};

// Define modules for optimizers
pub mod sgd;

pub use sgd::{Sgd, SgdConfig};

/// Trait for optimization algorithms.
/// Optimizers update leaf parameters in place from the gradients left by `backward`.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// Fails if a parameter handle is stale or no longer a leaf.
    fn step(&mut self) -> Result<(), GradRustError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Call it before the next backward pass, since gradients accumulate.
    fn zero_grad(&self) {
        for p in self.params() {
            p.zero_grad();
        }
    }

    /// The parameters this optimizer updates, in registration order.
    fn params(&self) -> &[Value];
}
