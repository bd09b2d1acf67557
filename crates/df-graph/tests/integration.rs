//! Integration tests for df-graph.

use std::collections::HashSet;

use df_core::NodeId;
use df_graph::{
    DuplicatePolicy, Edge, EdgeIndex, FlowGraph, GraphBuilder, GraphError, find_cycle,
    is_acyclic, reach, repair,
};
use proptest::prelude::*;

fn n(i: u32) -> NodeId {
    NodeId::from_index(i)
}

fn arbitrary_graph() -> impl Strategy<Value = FlowGraph> {
    (1usize..25).prop_flat_map(|nodes| {
        let edge = (0..nodes as u32, 0..nodes as u32, 0u32..100);
        prop::collection::vec(edge, 0..120).prop_map(move |triples| {
            let mut builder = GraphBuilder::new(nodes);
            builder.extend(triples.into_iter().filter(|(u, v, _)| u != v));
            builder.build().unwrap()
        })
    })
}

#[test]
fn build_and_query_store() {
    let graph = GraphBuilder::new(4)
        .edge(0, 1, 10)
        .edge(0, 2, 5)
        .edge(1, 3, 10)
        .edge(2, 3, 5)
        .build()
        .unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.out_degree(n(0)), 2);
    assert_eq!(graph.in_degree(n(3)), 2);
    assert!(is_acyclic(&graph));
    assert!(reach::check_reachable(&graph, n(0), n(3)).is_ok());

    let edges = graph.to_edge_list();
    assert_eq!(edges[0], Edge::from_indices(0, 1, 10));
    assert_eq!(edges[3], Edge::from_indices(2, 3, 5));
}

#[test]
fn sink_without_incoming_edges_has_no_path() {
    let graph = GraphBuilder::new(3).edge(0, 1, 3).build().unwrap();
    let err = reach::check_reachable(&graph, n(0), n(2)).unwrap_err();
    assert_eq!(err, GraphError::NoPath { source: n(0), sink: n(2) });
    assert!(err.to_string().contains("No path"));
}

#[test]
fn triangle_repair_leaves_two_edge_path() {
    let mut graph = GraphBuilder::new(3)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(2, 0, 1)
        .build()
        .unwrap();

    let report = repair::remove_cycles(&mut graph);

    assert_eq!(report.removed().len(), 1);
    assert_eq!(graph.edge_count(), 2);
    assert!(is_acyclic(&graph));
    assert!(find_cycle(&graph).is_none());
    assert!(reach::is_reachable(&graph, n(0), n(2)));
}

#[test]
fn route_style_graph_with_both_directions() {
    // Every route listed in both directions: repair keeps one direction per pair.
    let mut builder = GraphBuilder::new(5).with_policy(DuplicatePolicy::Max);
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)] {
        builder.add_edge(a, b, 10);
        builder.add_edge(b, a, 10);
    }
    let mut graph = builder.build().unwrap();
    assert_eq!(graph.edge_count(), 10);

    repair::remove_cycles(&mut graph);
    assert!(is_acyclic(&graph));
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)] {
        let kept = graph.contains_edge(n(a), n(b)) as u8 + graph.contains_edge(n(b), n(a)) as u8;
        assert_eq!(kept, 1);
    }
}

#[test]
fn edge_index_covers_graph() {
    let graph = GraphBuilder::new(100)
        .edge(0, 99, 1)
        .edge(5, 6, 2)
        .edge(5, 50, 3)
        .build()
        .unwrap();
    let index = EdgeIndex::from_graph(&graph);
    for (i, edge) in graph.edges().enumerate() {
        assert_eq!(index.index_of(edge.from, edge.to).unwrap(), i);
        assert_eq!(index.edge(i), edge);
    }
}

#[test]
fn long_cycle_repair_is_iterative() {
    // A 50k-node ring would overflow a recursive DFS.
    let size = 50_000u32;
    let mut builder = GraphBuilder::new(size as usize);
    for i in 0..size {
        builder.add_edge(i, (i + 1) % size, 1);
    }
    let mut graph = builder.build().unwrap();
    let report = repair::remove_cycles(&mut graph);
    assert_eq!(report.removed(), &[Edge::from_indices(size - 1, 0, 1)]);
    assert!(is_acyclic(&graph));
}

proptest! {
    #[test]
    fn repair_yields_acyclic_subgraph(graph in arbitrary_graph()) {
        let original: HashSet<Edge> = graph.edges().collect();
        let mut repaired = graph.clone();
        let report = repair::remove_cycles(&mut repaired);

        prop_assert!(is_acyclic(&repaired));
        prop_assert_eq!(repaired.node_count(), graph.node_count());

        let kept: HashSet<Edge> = repaired.edges().collect();
        prop_assert!(kept.is_subset(&original));
        prop_assert_eq!(kept.len() + report.removed().len(), original.len());
        for edge in report.removed() {
            prop_assert!(original.contains(edge));
        }
    }

    #[test]
    fn acyclic_graphs_are_left_alone(graph in arbitrary_graph()) {
        let mut dag = graph.clone();
        // Keep only forward edges, which is acyclic by construction.
        for edge in graph.edges().filter(|e| e.from > e.to) {
            dag.remove_edge(edge.from, edge.to);
        }
        let before = dag.clone();
        prop_assert!(repair::remove_cycles(&mut dag).is_noop());
        prop_assert_eq!(dag, before);
    }

    #[test]
    fn find_cycle_agrees_with_kahn(graph in arbitrary_graph()) {
        match find_cycle(&graph) {
            Some(cycle) => {
                prop_assert!(!is_acyclic(&graph));
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(graph.contains_edge(pair[0], pair[1]));
                }
            }
            None => prop_assert!(is_acyclic(&graph)),
        }
    }
}
