//! # GradRust core
//!
//! A scalar reverse-mode automatic differentiation engine. Every [`Value`] is one node of
//! a computation graph stored in a shared arena ([`Graph`]); calling
//! [`Value::backward`] on an output fills in `∂output/∂node` for every node it depends on.
//!
//! The [`nn`] module builds neurons, layers and multi-layer perceptrons out of these
//! scalars.
//!
//! ```
//! use gradrust_core::{Graph, GradRustError};
//!
//! # fn main() -> Result<(), GradRustError> {
//! let graph = Graph::new();
//! let x = graph.leaf(3.0);
//! let y = graph.leaf(4.0);
//! let f = &x * &x + &y * &y;
//! f.backward()?;
//! assert_eq!(f.data(), 25.0);
//! assert_eq!((x.grad(), y.grad()), (6.0, 8.0));
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

pub use config::{GraphConfig, RuleMode};
pub use error::GradRustError;
pub use graph::{Checkpoint, Graph, NodeId, Op};
pub use value::Value;
// Re-export traits required by public functions
pub use num_traits;
