use crate::error::GradRustError;
use crate::nn::module::Module;
use crate::ops::relu_op;
use crate::value::Value;

/// Layer that applies the Rectified Linear Unit (ReLU) activation element-wise.
///
/// This layer does not have any learnable parameters.
#[derive(Debug, Default, Clone)]
pub struct ReLU {}

impl ReLU {
    pub fn new() -> Self {
        ReLU {}
    }
}

impl Module for ReLU {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        input.iter().map(relu_op).collect()
    }
}
