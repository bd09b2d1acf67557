//! Acyclicity checks.

use std::collections::VecDeque;

use df_core::NodeId;

use crate::graph::FlowGraph;

/// DFS colouring shared by cycle search and cycle repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Topological order via Kahn's algorithm, or `None` if the graph has a cycle.
pub fn topological_order(graph: &FlowGraph) -> Option<Vec<NodeId>> {
    let mut in_degree = graph.in_degree.clone();
    let mut queue: VecDeque<NodeId> = graph
        .nodes()
        .filter(|n| in_degree[n.as_usize()] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (succ, _) in graph.successors(node) {
            let deg = &mut in_degree[succ.as_usize()];
            *deg -= 1;
            if *deg == 0 {
                queue.push_back(succ);
            }
        }
    }

    (order.len() == graph.node_count()).then_some(order)
}

/// True if no node is reachable from itself via a nonempty edge sequence.
pub fn is_acyclic(graph: &FlowGraph) -> bool {
    topological_order(graph).is_some()
}

/// Find one directed cycle as a closed node sequence `n0, n1, ..., n0`.
///
/// Roots and successors are explored in ascending id order, so the result
/// is deterministic for a given graph.
pub fn find_cycle(graph: &FlowGraph) -> Option<Vec<NodeId>> {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];

    for root in graph.nodes() {
        if marks[root.as_usize()] != Mark::Unvisited {
            continue;
        }
        marks[root.as_usize()] = Mark::OnStack;
        let mut stack = vec![(root, graph.out[root.as_usize()].keys())];

        while let Some((node, succs)) = stack.last_mut() {
            let node = *node;
            match succs.next() {
                Some(&next) => match marks[next.as_usize()] {
                    Mark::Unvisited => {
                        marks[next.as_usize()] = Mark::OnStack;
                        stack.push((next, graph.out[next.as_usize()].keys()));
                    }
                    Mark::OnStack => {
                        let start = stack.iter().position(|(n, _)| *n == next)?;
                        let mut cycle: Vec<NodeId> =
                            stack[start..].iter().map(|(n, _)| *n).collect();
                        cycle.push(next);
                        return Some(cycle);
                    }
                    Mark::Done => {}
                },
                None => {
                    marks[node.as_usize()] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    None
}
