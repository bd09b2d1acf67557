//! The graph store.

use std::collections::BTreeMap;

use df_core::{Capacity, NodeId};

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult, InvalidEdgeReason};

/// Directed, capacitated graph over nodes `[0, N)`.
///
/// Holds at most one edge per ordered pair. Successors are kept ordered by
/// node id so every traversal over the store is deterministic.
///
/// Acyclicity and source/sink reachability are not enforced here; see
/// [`crate::repair`] and [`crate::reach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowGraph {
    /// Outgoing edges per node: successor -> capacity.
    pub(crate) out: Vec<BTreeMap<NodeId, Capacity>>,

    /// Incoming edge count per node.
    pub(crate) in_degree: Vec<usize>,

    pub(crate) edge_count: usize,
}

impl FlowGraph {
    /// Create a graph with `node_count` nodes and no edges.
    ///
    /// For counts read from untrusted input use [`FlowGraph::try_new`].
    pub fn new(node_count: usize) -> Self {
        Self {
            out: vec![BTreeMap::new(); node_count],
            in_degree: vec![0; node_count],
            edge_count: 0,
        }
    }

    /// Create a graph with `node_count` nodes, failing with
    /// `NodeCountTooLarge` if the count exceeds the `NodeId` range or the
    /// per-node tables cannot be allocated.
    pub fn try_new(node_count: usize) -> GraphResult<Self> {
        let too_large = || GraphError::NodeCountTooLarge { node_count };
        if node_count > NodeId::MAX_NODE_COUNT {
            return Err(too_large());
        }

        let mut out = Vec::new();
        out.try_reserve_exact(node_count).map_err(|_| too_large())?;
        out.resize_with(node_count, BTreeMap::new);
        let mut in_degree = Vec::new();
        in_degree.try_reserve_exact(node_count).map_err(|_| too_large())?;
        in_degree.resize(node_count, 0);

        Ok(Self {
            out,
            in_degree,
            edge_count: 0,
        })
    }

    /// Number of nodes N.
    pub fn node_count(&self) -> usize {
        self.out.len()
    }

    /// Number of edges currently stored.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map_while(NodeId::try_from_usize)
    }

    /// Whether `node` lies in `[0, N)`.
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.as_usize() < self.node_count()
    }

    /// Fail with `InvalidNode` unless `node` lies in `[0, N)`.
    pub fn check_node(&self, node: NodeId) -> GraphResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node: node.index(),
                node_count: self.node_count(),
            })
        }
    }

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// Returns the previous capacity when an existing edge was overwritten.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: Capacity,
    ) -> GraphResult<Option<Capacity>> {
        if from == to {
            return Err(GraphError::InvalidEdge {
                from: from.index(),
                to: to.index(),
                reason: InvalidEdgeReason::SelfLoop,
            });
        }
        if !self.contains_node(from) || !self.contains_node(to) {
            return Err(GraphError::InvalidEdge {
                from: from.index(),
                to: to.index(),
                reason: InvalidEdgeReason::OutOfRange {
                    node_count: self.node_count(),
                },
            });
        }

        let previous = self.out[from.as_usize()].insert(to, capacity);
        if previous.is_none() {
            self.in_degree[to.as_usize()] += 1;
            self.edge_count += 1;
        }
        Ok(previous)
    }

    /// Insert an [`Edge`] value.
    pub fn insert(&mut self, edge: Edge) -> GraphResult<Option<Capacity>> {
        self.add_edge(edge.from, edge.to, edge.capacity)
    }

    /// Remove the edge `from -> to` if present. Absent edges are a no-op.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<Capacity> {
        let removed = self.out.get_mut(from.as_usize())?.remove(&to)?;
        self.in_degree[to.as_usize()] -= 1;
        self.edge_count -= 1;
        Some(removed)
    }

    /// Capacity of `from -> to`, if the edge exists.
    pub fn capacity(&self, from: NodeId, to: NodeId) -> Option<Capacity> {
        self.out.get(from.as_usize())?.get(&to).copied()
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.capacity(from, to).is_some()
    }

    /// Outgoing edges of `node`, ordered by target. Empty for unknown nodes.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.successors(node)
            .map(move |(to, capacity)| Edge::new(node, to, capacity))
    }

    /// Successor/capacity pairs of `node`, ordered by successor id.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Capacity)> + '_ {
        self.out
            .get(node.as_usize())
            .into_iter()
            .flat_map(|succ| succ.iter().map(|(&to, &cap)| (to, cap)))
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out.get(node.as_usize()).map_or(0, BTreeMap::len)
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_degree.get(node.as_usize()).copied().unwrap_or(0)
    }

    /// All edges in ascending `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes().flat_map(move |node| self.out_edges(node))
    }

    /// Snapshot of all edges, for serialization or handing to ingestion consumers.
    pub fn to_edge_list(&self) -> Vec<Edge> {
        self.edges().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u32) -> NodeId {
        NodeId::from_index(i)
    }

    #[test]
    fn add_and_overwrite() {
        let mut g = FlowGraph::new(3);
        assert_eq!(g.add_edge(n(0), n(1), 5).unwrap(), None);
        assert_eq!(g.add_edge(n(0), n(1), 8).unwrap(), Some(5));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.capacity(n(0), n(1)), Some(8));
        assert_eq!(g.in_degree(n(1)), 1);
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = FlowGraph::new(2);
        let err = g.add_edge(n(1), n(1), 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidEdge {
                reason: InvalidEdgeReason::SelfLoop,
                ..
            }
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn out_of_range_rejected() {
        let mut g = FlowGraph::new(2);
        let err = g.add_edge(n(0), n(2), 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidEdge {
                reason: InvalidEdgeReason::OutOfRange { node_count: 2 },
                ..
            }
        ));
    }

    #[test]
    fn try_new_bounds_node_count() {
        assert_eq!(FlowGraph::try_new(3).unwrap(), FlowGraph::new(3));
        let too_many = NodeId::MAX_NODE_COUNT + 1;
        assert_eq!(
            FlowGraph::try_new(too_many).unwrap_err(),
            GraphError::NodeCountTooLarge {
                node_count: too_many
            }
        );
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut g = FlowGraph::new(3);
        g.add_edge(n(0), n(1), 1).unwrap();
        assert_eq!(g.remove_edge(n(1), n(2)), None);
        assert_eq!(g.remove_edge(n(9), n(2)), None);
        assert_eq!(g.remove_edge(n(0), n(1)), Some(1));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.in_degree(n(1)), 0);
    }

    #[test]
    fn zero_capacity_edge_is_present() {
        let mut g = FlowGraph::new(2);
        g.add_edge(n(0), n(1), 0).unwrap();
        assert!(g.contains_edge(n(0), n(1)));
        assert_eq!(g.out_degree(n(0)), 1);
    }

    #[test]
    fn out_edges_sorted_and_empty_for_unknown() {
        let mut g = FlowGraph::new(4);
        g.add_edge(n(0), n(3), 1).unwrap();
        g.add_edge(n(0), n(1), 2).unwrap();
        let targets: Vec<u32> = g.out_edges(n(0)).map(|e| e.to.index()).collect();
        assert_eq!(targets, vec![1, 3]);
        assert_eq!(g.out_edges(n(2)).count(), 0);
        assert_eq!(g.out_edges(n(42)).count(), 0);
    }
}
