use crate::config::GraphConfig;
use crate::error::GradRustError;
use crate::graph::node::{NodeData, NodeId, Op};

/// Flat storage for every node of one graph.
///
/// Nodes are only ever appended, and an `Op` can only name handles that already
/// exist, so the stored graph is acyclic by construction.
#[derive(Debug)]
pub(crate) struct Arena {
    nodes: Vec<NodeData>,
    generation: u32,
    pub(crate) config: GraphConfig,
}

impl Arena {
    pub(crate) fn new(config: GraphConfig) -> Self {
        Arena {
            nodes: Vec::new(),
            generation: 0,
            config,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn push(&mut self, value: f64, op: Op) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(NodeData {
            value,
            grad: 0.0,
            op,
            generation: self.generation,
        });
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&NodeData, GradRustError> {
        match self.nodes.get(id.index) {
            Some(node) if node.generation == id.generation => Ok(node),
            _ => Err(GradRustError::StaleNode {
                index: id.index,
                generation: id.generation,
            }),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut NodeData, GradRustError> {
        match self.nodes.get_mut(id.index) {
            Some(node) if node.generation == id.generation => Ok(node),
            _ => Err(GradRustError::StaleNode {
                index: id.index,
                generation: id.generation,
            }),
        }
    }

    pub(crate) fn value(&self, id: NodeId) -> Result<f64, GradRustError> {
        self.get(id).map(|node| node.value)
    }

    pub(crate) fn grad(&self, id: NodeId) -> Result<f64, GradRustError> {
        self.get(id).map(|node| node.grad)
    }

    pub(crate) fn op(&self, id: NodeId) -> Result<Op, GradRustError> {
        self.get(id).map(|node| node.op)
    }

    /// Adds `delta` to the gradient of `id`.
    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: f64) -> Result<(), GradRustError> {
        self.get_mut(id)?.grad += delta;
        Ok(())
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), GradRustError> {
        self.get_mut(id)?.grad = grad;
        Ok(())
    }

    /// Drops every node at or after `len`. Returns how many nodes were dropped.
    pub(crate) fn truncate(&mut self, len: usize) -> usize {
        if len >= self.nodes.len() {
            return 0;
        }
        let dropped = self.nodes.len() - len;
        self.nodes.truncate(len);
        self.generation = self.generation.wrapping_add(1);
        dropped
    }
}
