//! Edge-list graph builder.

use std::collections::HashMap;

use df_core::{Capacity, NodeId};

use crate::error::{GraphError, GraphResult, InvalidEdgeReason};
use crate::graph::FlowGraph;

/// How repeated `(from, to)` pairs in raw input are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DuplicatePolicy {
    /// The last occurrence overwrites earlier ones.
    #[default]
    LastWins,
    /// The first occurrence is kept, later ones are ignored.
    KeepFirst,
    /// Keep the largest capacity seen.
    Max,
    /// Add capacities of all occurrences (saturating).
    Sum,
}

impl DuplicatePolicy {
    fn merge(self, existing: Capacity, incoming: Capacity) -> Capacity {
        match self {
            DuplicatePolicy::LastWins => incoming,
            DuplicatePolicy::KeepFirst => existing,
            DuplicatePolicy::Max => existing.max(incoming),
            DuplicatePolicy::Sum => existing.saturating_add(incoming),
        }
    }
}

/// Builder for a [`FlowGraph`] from `(from, to, capacity)` triples.
///
/// Triples are collected unchecked; `build()` validates every edge and
/// resolves duplicate pairs with the configured [`DuplicatePolicy`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<(u32, u32, Capacity)>,
    policy: DuplicatePolicy,
}

impl GraphBuilder {
    /// Create a builder for a graph with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Chainable edge insertion.
    pub fn edge(mut self, from: u32, to: u32, capacity: Capacity) -> Self {
        self.add_edge(from, to, capacity);
        self
    }

    pub fn add_edge(&mut self, from: u32, to: u32, capacity: Capacity) -> &mut Self {
        self.edges.push((from, to, capacity));
        self
    }

    pub fn extend<I>(&mut self, triples: I) -> &mut Self
    where
        I: IntoIterator<Item = (u32, u32, Capacity)>,
    {
        self.edges.extend(triples);
        self
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Validate and freeze the collected edges into a [`FlowGraph`].
    pub fn build(self) -> GraphResult<FlowGraph> {
        let mut graph = FlowGraph::try_new(self.node_count)?;
        let mut merged: HashMap<(u32, u32), Capacity> = HashMap::new();
        let mut duplicates = 0usize;

        for (from, to, capacity) in self.edges {
            let in_range = |i: u32| (i as usize) < self.node_count;
            if !(in_range(from) && in_range(to)) {
                return Err(GraphError::InvalidEdge {
                    from,
                    to,
                    reason: InvalidEdgeReason::OutOfRange {
                        node_count: self.node_count,
                    },
                });
            }
            let (u, v) = (NodeId::from_index(from), NodeId::from_index(to));
            let capacity = match merged.get(&(from, to)) {
                Some(&existing) => {
                    duplicates += 1;
                    self.policy.merge(existing, capacity)
                }
                None => capacity,
            };
            graph.add_edge(u, v, capacity)?;
            merged.insert((from, to), capacity);
        }

        if duplicates > 0 {
            tracing::debug!(
                duplicates,
                policy = ?self.policy,
                "merged duplicate edges"
            );
        }

        Ok(graph)
    }
}
