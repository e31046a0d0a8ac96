//! The user-facing scalar node handle.

pub mod autograd_methods;
pub mod traits;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId, Op};

/// Handle to one scalar node of a [`Graph`].
///
/// `Value` is a thin `(graph, id)` pair: cloning it clones the handle, not the node,
/// and two handles compare equal (`same_node`) only when they name the same node.
/// Distinct nodes holding equal numbers are different graph members.
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
}

impl Value {
    pub(crate) fn from_parts(graph: Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Forward value of the node.
    ///
    /// # Panics
    /// Panics if the node was discarded by [`Graph::rewind`]. Use [`Value::try_data`]
    /// to get an error instead.
    pub fn data(&self) -> f64 {
        match self.try_data() {
            Ok(v) => v,
            Err(e) => panic!("Value::data: {}", e),
        }
    }

    pub fn try_data(&self) -> Result<f64, GradRustError> {
        self.graph.arena().value(self.id)
    }

    /// Accumulated gradient of the node (`0.0` until a backward pass reaches it).
    ///
    /// # Panics
    /// Panics if the node was discarded by [`Graph::rewind`].
    pub fn grad(&self) -> f64 {
        match self.try_grad() {
            Ok(g) => g,
            Err(e) => panic!("Value::grad: {}", e),
        }
    }

    pub fn try_grad(&self) -> Result<f64, GradRustError> {
        self.graph.arena().grad(self.id)
    }

    pub fn op(&self) -> Result<Op, GradRustError> {
        self.graph.arena().op(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op(), Ok(Op::Leaf))
    }

    /// Resets the gradient to `0.0`. A stale handle is ignored.
    pub fn zero_grad(&self) {
        if let Ok(node) = self.graph.arena_mut().get_mut(self.id) {
            node.grad = 0.0;
        }
    }

    /// Overwrites the forward value of a leaf. This is how optimizers update parameters;
    /// computed nodes are immutable and reject the call with `NotALeaf`.
    pub fn set_data(&self, value: f64) -> Result<(), GradRustError> {
        let mut arena = self.graph.arena_mut();
        let node = arena.get_mut(self.id)?;
        if !node.op.is_leaf() {
            return Err(GradRustError::NotALeaf { index: self.id.index() });
        }
        node.value = value;
        Ok(())
    }

    /// Identity comparison.
    pub fn same_node(&self, other: &Value) -> bool {
        self.graph.same_graph(&other.graph) && self.id == other.id
    }

    /// Creates a constant leaf in the same graph as `self`.
    pub(crate) fn constant(&self, value: f64) -> Value {
        self.graph.leaf(value)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
