//! Source-to-sink reachability.

use std::collections::VecDeque;

use df_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Nodes reachable from `source` by forward traversal (including `source`).
///
/// Every edge counts, 0-capacity ones included; capacity only matters to flow.
pub fn reachable_set(graph: &FlowGraph, source: NodeId) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    if !graph.contains_node(source) {
        return seen;
    }

    let mut queue = VecDeque::from([source]);
    seen[source.as_usize()] = true;
    while let Some(node) = queue.pop_front() {
        for (succ, _) in graph.successors(node) {
            if !seen[succ.as_usize()] {
                seen[succ.as_usize()] = true;
                queue.push_back(succ);
            }
        }
    }
    seen
}

/// Whether `sink` is reachable from `source`. Unknown nodes are unreachable.
pub fn is_reachable(graph: &FlowGraph, source: NodeId, sink: NodeId) -> bool {
    graph.contains_node(sink) && reachable_set(graph, source)[sink.as_usize()]
}

/// Fail with `NoPath` unless `sink` is reachable from `source`.
pub fn check_reachable(graph: &FlowGraph, source: NodeId, sink: NodeId) -> GraphResult<()> {
    graph.check_node(source)?;
    graph.check_node(sink)?;
    if is_reachable(graph, source, sink) {
        Ok(())
    } else {
        Err(GraphError::NoPath { source, sink })
    }
}
