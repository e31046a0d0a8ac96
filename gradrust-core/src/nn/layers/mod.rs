// src/nn/layers/mod.rs

pub mod layer;
pub mod neuron;
pub mod relu;
pub mod sigmoid;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::Neuron;
pub use relu::ReLU;
pub use sigmoid::Sigmoid;
