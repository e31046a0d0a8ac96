// src/nn/mod.rs
// Neural-network building blocks on top of the scalar engine.

pub mod containers;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use containers::Sequential;
pub use init::Init;
pub use layers::{Layer, Neuron, ReLU, Sigmoid};
pub use losses::{BCELoss, MSELoss, Reduction};
pub use module::Module;
