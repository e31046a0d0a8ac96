use std::fmt;

/// Stable handle to a node inside a [`Graph`](super::Graph) arena.
///
/// `index` is the slot in the arena. `generation` is bumped every time the arena is
/// rewound, so a handle to a discarded node never aliases the node that later reuses
/// its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// The operation that produced a node, together with the handles of its operands.
///
/// The backward engine dispatches on this tag to apply the local derivative rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Constant or parameter. No operands, no rule.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Base node and constant exponent.
    Pow(NodeId, f64),
    Exp(NodeId),
    Log(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Operand set of the node. A node used twice by the same operation (`x * x`)
    /// appears once; the rule itself still credits both uses.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => {
                if a == b {
                    vec![a]
                } else {
                    vec![a, b]
                }
            }
            Op::Pow(a, _) | Op::Exp(a) | Op::Log(a) | Op::Relu(a) => vec![a],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow(_, p) => write!(f, "pow({})", p),
            Op::Exp(_) => write!(f, "exp"),
            Op::Log(_) => write!(f, "log"),
            Op::Relu(_) => write!(f, "relu"),
        }
    }
}

/// One arena slot: forward value, gradient accumulator and producing operation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) generation: u32,
}
