//! Cycle repair: turn an arbitrary digraph into a DAG by removing edges.
//!
//! A single depth-first pass removes every back edge it meets. Each back
//! edge `u -> v` closes the cycle `v -> ... -> u -> v` formed with the
//! current DFS path, and a graph without the back edges of some DFS forest
//! is acyclic, so one O(V + E) pass leaves a DAG.

use df_core::NodeId;

use crate::edge::Edge;
use crate::error::GraphResult;
use crate::graph::FlowGraph;
use crate::reach;
use crate::validate::Mark;

/// Edges removed by [`remove_cycles`], in removal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    removed: Vec<Edge>,
}

impl RepairReport {
    pub fn removed(&self) -> &[Edge] {
        &self.removed
    }

    /// True if the graph was already acyclic.
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove edges from `graph` until no directed cycle remains.
///
/// Only edges are removed; node count is unchanged and no edge is added.
/// Roots and successors are visited in ascending id order, so the removed
/// set is deterministic.
pub fn remove_cycles(graph: &mut FlowGraph) -> RepairReport {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];
    let mut report = RepairReport::default();

    for index in 0..graph.node_count() {
        if marks[index] != Mark::Unvisited {
            continue;
        }
        let Some(root) = NodeId::try_from_usize(index) else {
            break;
        };
        marks[root.as_usize()] = Mark::OnStack;
        let mut stack = vec![(root, successor_snapshot(graph, root), 0usize)];

        while let Some((node, succs, pos)) = stack.last_mut() {
            let node = *node;
            let Some(&next) = succs.get(*pos) else {
                marks[node.as_usize()] = Mark::Done;
                stack.pop();
                continue;
            };
            *pos += 1;

            match marks[next.as_usize()] {
                Mark::Unvisited => {
                    marks[next.as_usize()] = Mark::OnStack;
                    let succs = successor_snapshot(graph, next);
                    stack.push((next, succs, 0));
                }
                Mark::OnStack => {
                    if let Some(capacity) = graph.remove_edge(node, next) {
                        tracing::debug!(from = %node, to = %next, capacity, "removed back edge");
                        report.removed.push(Edge::new(node, next, capacity));
                    }
                }
                Mark::Done => {}
            }
        }
    }

    if !report.is_noop() {
        tracing::info!(
            removed = report.removed.len(),
            remaining = graph.edge_count(),
            "cycle repair complete"
        );
    }
    report
}

/// Repair cycles, then require `sink` to be reachable from `source`.
///
/// This is the preparation a graph ingested from real-world data needs
/// before a flow query.
pub fn repair_for_flow(
    graph: &mut FlowGraph,
    source: NodeId,
    sink: NodeId,
) -> GraphResult<RepairReport> {
    graph.check_node(source)?;
    graph.check_node(sink)?;
    let report = remove_cycles(graph);
    reach::check_reachable(graph, source, sink)?;
    Ok(report)
}

fn successor_snapshot(graph: &FlowGraph, node: NodeId) -> Vec<NodeId> {
    graph.successors(node).map(|(to, _)| to).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::error::GraphError;
    use crate::validate::is_acyclic;

    #[test]
    fn triangle_loses_exactly_one_edge() {
        let mut graph = GraphBuilder::new(3)
            .edge(0, 1, 1)
            .edge(1, 2, 1)
            .edge(2, 0, 1)
            .build()
            .unwrap();
        let report = remove_cycles(&mut graph);

        assert_eq!(report.removed(), &[Edge::from_indices(2, 0, 1)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 3);
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn dag_is_untouched() {
        let mut graph = GraphBuilder::new(4)
            .edge(0, 1, 3)
            .edge(0, 2, 3)
            .edge(1, 3, 3)
            .edge(2, 3, 3)
            .build()
            .unwrap();
        let before = graph.clone();
        assert!(remove_cycles(&mut graph).is_noop());
        assert_eq!(graph, before);
    }

    #[test]
    fn two_cycle_and_nested_cycles() {
        let mut graph = GraphBuilder::new(5)
            .edge(0, 1, 1)
            .edge(1, 0, 1)
            .edge(1, 2, 1)
            .edge(2, 3, 1)
            .edge(3, 1, 1)
            .edge(3, 4, 1)
            .edge(4, 2, 1)
            .build()
            .unwrap();
        let report = remove_cycles(&mut graph);
        assert!(is_acyclic(&graph));
        assert_eq!(report.removed().len(), 3);
        assert!(graph.contains_edge(NodeId::from_index(0), NodeId::from_index(1)));
    }

    #[test]
    fn repair_for_flow_reports_no_path() {
        let mut graph = GraphBuilder::new(3)
            .edge(0, 1, 1)
            .edge(1, 0, 1)
            .build()
            .unwrap();
        let err = repair_for_flow(&mut graph, NodeId::from_index(0), NodeId::from_index(2))
            .unwrap_err();
        assert!(matches!(err, GraphError::NoPath { .. }));
        assert!(is_acyclic(&graph));
    }
}
