use crate::autograd;
use crate::error::GradRustError;
use crate::ops;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

impl Value {
    /// Runs the backward pass with this node as the terminal (loss) node.
    ///
    /// See [`autograd::backward`].
    pub fn backward(&self) -> Result<(), GradRustError> {
        autograd::backward(self)
    }

    /// `self ^ exponent` for a constant exponent. See [`ops::pow_op`].
    pub fn pow<E>(&self, exponent: E) -> Result<Value, GradRustError>
    where
        E: ToPrimitive + Debug,
    {
        ops::pow_op(self, exponent)
    }

    pub fn exp(&self) -> Result<Value, GradRustError> {
        ops::exp_op(self)
    }

    /// Natural logarithm, with the `log(0)` sentinel described in [`ops::ln_op`].
    pub fn log(&self) -> Result<Value, GradRustError> {
        ops::ln_op(self)
    }

    pub fn relu(&self) -> Result<Value, GradRustError> {
        ops::relu_op(self)
    }

    pub fn sigmoid(&self) -> Result<Value, GradRustError> {
        ops::sigmoid_op(self)
    }
}
