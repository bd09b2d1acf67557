//! Independent checks of a flow assignment.

use df_core::{FlowValue, total_capacity};
use df_graph::FlowGraph;

use crate::error::{SolverError, SolverResult};
use crate::solution::MaxFlow;

fn violation(what: String) -> SolverError {
    SolverError::FlowViolation { what }
}

/// Check capacity bounds, conservation, and the reported value of `flow` against `graph`.
pub fn verify_flow(graph: &FlowGraph, flow: &MaxFlow) -> SolverResult<()> {
    if flow.edge_flows.len() != graph.edge_count() {
        return Err(violation(format!(
            "{} edge flows for {} edges",
            flow.edge_flows.len(),
            graph.edge_count()
        )));
    }

    // Signed balance per node: inflow - outflow.
    let mut balance = vec![0i128; graph.node_count()];
    for ef in &flow.edge_flows {
        let edge = ef.edge;
        match graph.capacity(edge.from, edge.to) {
            Some(cap) if cap == edge.capacity => {}
            _ => return Err(violation(format!("edge {} is not in the graph", edge))),
        }
        if ef.flow > FlowValue::from(edge.capacity) {
            return Err(violation(format!(
                "flow {} exceeds capacity on {}",
                ef.flow, edge
            )));
        }
        balance[edge.from.as_usize()] -= i128::from(ef.flow);
        balance[edge.to.as_usize()] += i128::from(ef.flow);
    }

    for node in graph.nodes() {
        let b = balance[node.as_usize()];
        if node == flow.source {
            if -b != i128::from(flow.value) {
                return Err(violation(format!(
                    "source net outflow {} differs from value {}",
                    -b, flow.value
                )));
            }
        } else if node == flow.sink {
            if b != i128::from(flow.value) {
                return Err(violation(format!(
                    "sink net inflow {} differs from value {}",
                    b, flow.value
                )));
            }
        } else if b != 0 {
            return Err(violation(format!(
                "conservation violated at node {} (imbalance {})",
                node, b
            )));
        }
    }

    Ok(())
}

/// Capacity of the cut separating `side` (true) from the rest.
pub fn cut_capacity(graph: &FlowGraph, side: &[bool]) -> FlowValue {
    let inside = |i: usize| side.get(i).copied().unwrap_or(false);
    total_capacity(
        graph
            .edges()
            .filter(|e| inside(e.from.as_usize()) && !inside(e.to.as_usize()))
            .map(|e| e.capacity),
    )
}
