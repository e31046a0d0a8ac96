//! # Node arena (`graph`)
//!
//! Every scalar node lives in the arena owned by a [`Graph`]. Operands are referenced by
//! [`NodeId`] handles, so the structure holds no reference cycles and the whole graph is
//! released when the last `Graph` (or [`Value`]) handle goes away.
//!
//! Long-lived parameters and per-step forward graphs can share one arena: take a
//! [`Checkpoint`] after the parameters are created and [`Graph::rewind`] to it once the
//! gradients of a step have been consumed.

pub(crate) mod arena;
pub mod node;

pub use node::{NodeId, Op};

use crate::config::GraphConfig;
use crate::error::GradRustError;
use crate::value::Value;
use arena::Arena;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Shared handle to a node arena. Cloning is shallow.
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<Arena>>,
}

/// Arena watermark returned by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    /// Number of nodes the graph held when the checkpoint was taken.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            inner: Rc::new(RefCell::new(Arena::new(config))),
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.arena().config
    }

    /// Creates a leaf node (constant or trainable parameter).
    pub fn leaf(&self, value: f64) -> Value {
        self.record(value, Op::Leaf)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Handles to discarded nodes become stale: accessing them afterwards yields
    /// [`GradRustError::StaleNode`] (or a panic for the infallible accessors).
    /// Nodes created before the checkpoint, and their gradients, are untouched.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let dropped = self.arena_mut().truncate(checkpoint.len);
        debug!(
            "Graph::rewind: discarded {} nodes, {} remain",
            dropped,
            self.len()
        );
    }

    /// Whether both handles point at the same arena.
    pub fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn record(&self, value: f64, op: Op) -> Value {
        let id = self.arena_mut().push(value, op);
        Value::from_parts(self.clone(), id)
    }

    pub(crate) fn arena(&self) -> Ref<'_, Arena> {
        self.inner.borrow()
    }

    pub(crate) fn arena_mut(&self) -> RefMut<'_, Arena> {
        self.inner.borrow_mut()
    }

    /// Ensures `value` lives in this graph.
    pub(crate) fn check_owns(&self, value: &Value, operation: &str) -> Result<(), GradRustError> {
        if self.same_graph(value.graph()) {
            Ok(())
        } else {
            Err(GradRustError::GraphMismatch {
                operation: operation.to_string(),
            })
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.arena();
        write!(f, "Graph(nodes={}, config={:?})", arena.len(), arena.config)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
