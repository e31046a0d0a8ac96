use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::NodeId;
use log::trace;
use std::collections::HashSet;

/// Post-order over every node reachable from `root`: a node appears only after all of
/// its operands. Each node is visited once, keyed by handle rather than by value.
///
/// The traversal keeps its own stack of `(node, expanded)` entries, so the depth of the
/// graph is bounded by memory rather than by the thread's call stack. A node is
/// appended when its `expanded` entry comes back to the top, by which time every
/// operand pushed above it has been appended.
pub(crate) fn topological_sort(arena: &Arena, root: NodeId) -> Result<Vec<NodeId>, GradRustError> {
    let mut visited = HashSet::new();
    let mut sorted = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_sort] node {} appended at {}", node.index(), sorted.len());
            sorted.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        let op = arena.op(node)?;
        stack.push((node, true));
        // Reversed so operands come out in declaration order.
        for input in op.operands().into_iter().rev() {
            if !visited.contains(&input) {
                stack.push((input, false));
            }
        }
    }
    Ok(sorted)
}
