// src/value/traits.rs

use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    /// Shows the handle together with the node's current value and gradient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.try_data(), self.try_grad()) {
            (Ok(data), Ok(grad)) => write!(
                f,
                "Value(id={}, data={}, grad={})",
                self.id().index(),
                data,
                grad
            ),
            _ => write!(f, "Value(id={}, <stale>)", self.id().index()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.try_data(), self.try_grad()) {
            (Ok(data), Ok(grad)) => match self.op() {
                Ok(op) if !op.is_leaf() => write!(f, "Val({}; Δ{})<- {}", data, grad, op),
                _ => write!(f, "Val({}; Δ{})", data, grad),
            },
            _ => write!(f, "Val(<stale>)"),
        }
    }
}
