//! Edmonds-Karp max flow: O(V * E^2).

use std::collections::VecDeque;

use df_core::{FlowValue, NodeId};
use df_graph::{EdgeIndex, FlowGraph};

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::residual::ResidualNetwork;
use crate::solution::{EdgeFlow, MaxFlow};

/// Solver state for one source/sink query over a borrowed graph.
pub struct EdmondsKarp {
    index: EdgeIndex,
    network: ResidualNetwork,
    source: NodeId,
    sink: NodeId,
    /// Arc used to reach each node in the latest BFS.
    parent_arc: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl EdmondsKarp {
    pub fn new(graph: &FlowGraph, source: NodeId, sink: NodeId) -> SolverResult<Self> {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        if source == sink {
            return Err(SolverError::InvalidTerminals { node: source });
        }

        let index = EdgeIndex::from_graph(graph);
        let network = ResidualNetwork::new(&index);
        let n = graph.node_count();
        Ok(Self {
            index,
            network,
            source,
            sink,
            parent_arc: vec![None; n],
            visited: vec![false; n],
        })
    }

    /// Breadth-first search for a shortest augmenting path.
    ///
    /// Leaves `visited` marking everything reachable from the source (up to
    /// the point the sink was found). Returns true if the sink was reached.
    fn bfs(&mut self) -> bool {
        self.visited.fill(false);
        self.parent_arc.fill(None);
        self.visited[self.source.as_usize()] = true;
        let mut queue = VecDeque::from([self.source]);

        while let Some(node) = queue.pop_front() {
            for &arc in self.network.arcs_from(node) {
                if self.network.residual(arc) == 0 {
                    continue;
                }
                let next = self.network.head(arc);
                if self.visited[next.as_usize()] {
                    continue;
                }
                self.visited[next.as_usize()] = true;
                self.parent_arc[next.as_usize()] = Some(arc);
                if next == self.sink {
                    return true;
                }
                queue.push_back(next);
            }
        }
        false
    }

    /// Arcs of the path found by the latest successful BFS, sink to source.
    fn path_arcs(&self) -> Vec<usize> {
        let mut arcs = Vec::new();
        let mut node = self.sink;
        while let Some(arc) = self.parent_arc[node.as_usize()] {
            arcs.push(arc);
            node = self.network.tail(arc);
        }
        arcs
    }

    fn augment(&mut self) -> FlowValue {
        let arcs = self.path_arcs();
        let bottleneck = arcs
            .iter()
            .map(|&arc| self.network.residual(arc))
            .min()
            .unwrap_or(0);
        for &arc in &arcs {
            self.network.push(arc, bottleneck);
        }
        tracing::debug!(bottleneck, length = arcs.len(), "augmenting path");
        bottleneck
    }

    /// Run to convergence, or until `config.max_augmentations` is exhausted.
    pub fn solve(mut self, config: &SolverConfig) -> SolverResult<MaxFlow> {
        let mut value: FlowValue = 0;
        let mut augmentations = 0usize;

        while self.bfs() {
            if config
                .max_augmentations
                .is_some_and(|limit| augmentations >= limit)
            {
                tracing::warn!(augmentations, best = value, "augmentation cap reached");
                // The sink is still reachable, so there is no cut to report.
                self.visited.clear();
                let partial = self.into_solution(value, augmentations);
                return Err(SolverError::FlowIncomplete {
                    best: value,
                    augmentations,
                    partial: Box::new(partial),
                });
            }
            value += self.augment();
            augmentations += 1;
        }

        tracing::info!(
            source = %self.source,
            sink = %self.sink,
            value,
            augmentations,
            "max flow computed"
        );
        Ok(self.into_solution(value, augmentations))
    }

    fn into_solution(self, value: FlowValue, augmentations: usize) -> MaxFlow {
        let edge_flows = self
            .index
            .edges()
            .iter()
            .enumerate()
            .map(|(i, &edge)| EdgeFlow {
                edge,
                flow: self.network.edge_flow(i),
            })
            .collect();

        MaxFlow {
            source: self.source,
            sink: self.sink,
            value,
            edge_flows,
            source_side: self.visited,
            augmentations,
        }
    }
}

/// Maximum flow from `source` to `sink`.
///
/// A source without out-edges or a sink without in-edges yields flow 0.
pub fn max_flow(
    graph: &FlowGraph,
    source: NodeId,
    sink: NodeId,
    config: &SolverConfig,
) -> SolverResult<MaxFlow> {
    EdmondsKarp::new(graph, source, sink)?.solve(config)
}
