//! Stable edge indexing for solver integration.
//!
//! Maps each edge of a [`FlowGraph`] to a contiguous index `0..E`, ordered by
//! `(from, to)`, with per-node offsets so a node's outgoing edges form one
//! contiguous range.

use std::ops::Range;

use df_core::{Capacity, NodeId};

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Edge index providing contiguous edge ids for solver arrays.
#[derive(Debug, Clone)]
pub struct EdgeIndex {
    /// Contiguous list of edges (index -> Edge), sorted by (from, to).
    edges: Vec<Edge>,

    /// Offsets: node i's edges are `edges[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,
}

impl EdgeIndex {
    /// Build an edge index from a graph.
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let mut edges = Vec::with_capacity(graph.edge_count());
        let mut offsets = Vec::with_capacity(graph.node_count() + 1);
        offsets.push(0);

        for node in graph.nodes() {
            edges.extend(graph.out_edges(node));
            offsets.push(edges.len());
        }

        Self { edges, offsets }
    }

    /// Number of indexed edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of nodes covered by the index.
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Get the edge for a contiguous index (panics if out of bounds).
    pub fn edge(&self, i: usize) -> Edge {
        self.edges[i]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Capacities in index order.
    pub fn capacities(&self) -> impl Iterator<Item = Capacity> + '_ {
        self.edges.iter().map(|e| e.capacity)
    }

    /// Index range of `node`'s outgoing edges (empty for unknown nodes).
    pub fn out_range(&self, node: NodeId) -> Range<usize> {
        let idx = node.as_usize();
        if idx >= self.node_count() {
            return 0..0;
        }
        self.offsets[idx]..self.offsets[idx + 1]
    }

    /// Get the contiguous index of `from -> to`.
    pub fn index_of(&self, from: NodeId, to: NodeId) -> GraphResult<usize> {
        let range = self.out_range(from);
        let start = range.start;
        self.edges[range]
            .binary_search_by_key(&to, |e| e.to)
            .map(|offset| start + offset)
            .map_err(|_| GraphError::EdgeNotFound { from, to })
    }
}
