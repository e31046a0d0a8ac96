//! # Backward engine (`autograd`)
//!
//! [`backward`] seeds the terminal node with a gradient of `1.0` and walks the reverse of
//! a post-order traversal, firing each node's local rule. Reverse post-order guarantees
//! that every path from the terminal to a node has contributed to its gradient before
//! that node's own rule reads it.

pub mod grad_check;
pub(crate) mod graph;

use crate::error::GradRustError;
use crate::ops::apply_local_rule;
use crate::value::Value;
use graph::topological_sort;
use log::debug;

/// Propagates gradients from `root` to every node it was computed from.
///
/// The seed overwrites whatever gradient `root` held; every other node accumulates on
/// top of its current gradient, so callers reset parameters with `zero_grad` between
/// steps. Run it once per graph: a second call on the same nodes adds a second round
/// of contributions.
///
/// # Errors
/// `StaleNode` if `root` or any node it depends on was discarded by `Graph::rewind`.
pub fn backward(root: &Value) -> Result<(), GradRustError> {
    let mut arena = root.graph().arena_mut();
    let sorted = topological_sort(&arena, root.id())?;
    debug!(
        "backward: {} nodes reachable from node {}",
        sorted.len(),
        root.id().index()
    );

    arena.set_grad(root.id(), 1.0)?;
    for node_id in sorted.iter().rev() {
        apply_local_rule(&mut arena, *node_id)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
