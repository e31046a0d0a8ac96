use thiserror::Error;

/// Custom error type for the GradRust framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradRustError {
    /// `pow` was given an exponent that is not a finite real constant.
    #[error("Invalid exponent for pow: {0}")]
    InvalidExponent(String),

    /// The handle points at a node that was discarded by `Graph::rewind`.
    #[error("Stale node handle: index {index}, generation {generation}")]
    StaleNode { index: usize, generation: u32 },

    #[error("Operands belong to different graphs during operation {operation}")]
    GraphMismatch { operation: String },

    #[error("Node {index} is not a leaf; only leaves can be updated in place")]
    NotALeaf { index: usize },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
