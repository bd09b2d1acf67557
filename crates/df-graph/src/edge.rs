use core::fmt;
use df_core::{Capacity, NodeId};

/// A directed, capacitated edge.
///
/// A capacity of 0 is a present-but-unusable edge, not an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, capacity: Capacity) -> Self {
        Self { from, to, capacity }
    }

    /// Build an edge from raw 0-based indices.
    pub fn from_indices(from: u32, to: u32, capacity: Capacity) -> Self {
        Self::new(NodeId::from_index(from), NodeId::from_index(to), capacity)
    }

    /// The ordered endpoint pair, used as the edge's identity.
    pub fn key(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (cap {})", self.from, self.to, self.capacity)
    }
}
