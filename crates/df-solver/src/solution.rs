//! Max-flow results.

use df_core::{FlowValue, NodeId};
use df_graph::Edge;
use serde::Serialize;

/// Flow carried by one original edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFlow {
    pub edge: Edge,
    pub flow: FlowValue,
}

/// Result of a max-flow solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow {
    pub source: NodeId,
    pub sink: NodeId,
    /// Total flow from source to sink.
    pub value: FlowValue,
    /// Per-edge flow for every original edge, in `(from, to)` order.
    pub edge_flows: Vec<EdgeFlow>,
    /// Nodes reachable from the source in the final residual network.
    ///
    /// Empty for the partial flow of a solve stopped at the augmentation cap.
    pub source_side: Vec<bool>,
    /// Augmenting paths pushed.
    pub augmentations: usize,
}

impl MaxFlow {
    /// Flow on `from -> to`, if that edge exists.
    pub fn flow_on(&self, from: NodeId, to: NodeId) -> Option<FlowValue> {
        self.edge_flows
            .binary_search_by_key(&(from, to), |ef| ef.edge.key())
            .ok()
            .map(|i| self.edge_flows[i].flow)
    }

    /// Edges carrying positive flow.
    pub fn active_edges(&self) -> impl Iterator<Item = &EdgeFlow> + '_ {
        self.edge_flows.iter().filter(|ef| ef.flow > 0)
    }

    pub fn in_source_side(&self, node: NodeId) -> bool {
        self.source_side.get(node.as_usize()).copied().unwrap_or(false)
    }

    /// Edges crossing from the source side to the sink side.
    ///
    /// After convergence these form a minimum cut whose capacity equals `value`;
    /// a partial flow has no source side and yields no edges.
    pub fn cut_edges(&self) -> Vec<Edge> {
        self.edge_flows
            .iter()
            .map(|ef| ef.edge)
            .filter(|e| self.in_source_side(e.from) && !self.in_source_side(e.to))
            .collect()
    }

    /// Serializable summary for reporting.
    pub fn summary(&self) -> FlowSummary {
        FlowSummary {
            source: self.source.index(),
            sink: self.sink.index(),
            value: self.value,
            augmentations: self.augmentations,
            edges: self.edge_flows.len(),
            active_edges: self.active_edges().count(),
            cut_edges: self
                .cut_edges()
                .iter()
                .map(|e| (e.from.index(), e.to.index(), e.capacity))
                .collect(),
        }
    }
}

/// Compact, serializable description of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSummary {
    pub source: u32,
    pub sink: u32,
    pub value: FlowValue,
    pub augmentations: usize,
    pub edges: usize,
    pub active_edges: usize,
    pub cut_edges: Vec<(u32, u32, u32)>,
}
