//! Integration tests for the max-flow solver.

use df_core::{FlowValue, NodeId};
use df_graph::{FlowGraph, GraphBuilder, reach};
use df_solver::{SolverConfig, cut_capacity, max_flow, verify_flow};
use df_synth::{SynthConfig, generate};
use proptest::prelude::*;

fn n(i: u32) -> NodeId {
    NodeId::from_index(i)
}

/// Minimum s-t cut by enumerating every subset containing s and not t.
fn brute_force_min_cut(graph: &FlowGraph, s: usize, t: usize) -> FlowValue {
    let nodes = graph.node_count();
    let mut best = FlowValue::MAX;
    for mask in 0u32..(1 << nodes) {
        if mask & (1 << s) == 0 || mask & (1 << t) != 0 {
            continue;
        }
        let side: Vec<bool> = (0..nodes).map(|i| mask & (1 << i) != 0).collect();
        best = best.min(cut_capacity(graph, &side));
    }
    best
}

fn small_graph() -> impl Strategy<Value = FlowGraph> {
    (2usize..8).prop_flat_map(|nodes| {
        let edge = (0..nodes as u32, 0..nodes as u32, 0u32..20);
        prop::collection::vec(edge, 0..30).prop_map(move |triples| {
            let mut builder = GraphBuilder::new(nodes);
            builder.extend(triples.into_iter().filter(|(u, v, _)| u != v));
            builder.build().unwrap()
        })
    })
}

#[test]
fn two_path_network() {
    let graph = GraphBuilder::new(4)
        .edge(0, 1, 10)
        .edge(0, 2, 5)
        .edge(1, 3, 10)
        .edge(2, 3, 5)
        .build()
        .unwrap();
    let flow = max_flow(&graph, n(0), n(3), &SolverConfig::default()).unwrap();

    assert_eq!(flow.value, 15);
    assert_eq!(flow.value, brute_force_min_cut(&graph, 0, 3));
    assert_eq!(flow.flow_on(n(0), n(1)), Some(10));
    assert_eq!(flow.flow_on(n(2), n(3)), Some(5));
    verify_flow(&graph, &flow).unwrap();
}

#[test]
fn single_edge_network() {
    let graph = GraphBuilder::new(2).edge(0, 1, 7).build().unwrap();
    let flow = max_flow(&graph, n(0), n(1), &SolverConfig::default()).unwrap();
    assert_eq!(flow.value, 7);
    assert_eq!(flow.cut_edges().len(), 1);
}

#[test]
fn unreachable_sink_checked_before_solving() {
    let graph = GraphBuilder::new(3).edge(0, 1, 4).build().unwrap();
    assert!(reach::check_reachable(&graph, n(0), n(2)).is_err());
    let flow = max_flow(&graph, n(0), n(2), &SolverConfig::default()).unwrap();
    assert_eq!(flow.value, 0);
}

#[test]
fn synthesized_dags_verify() {
    for seed in 0..10 {
        let dag = generate(&SynthConfig::new(60, 400).with_seed(seed)).unwrap();
        let graph = dag.to_graph().unwrap();
        let flow = max_flow(&graph, dag.source(), dag.sink(), &SolverConfig::default()).unwrap();
        verify_flow(&graph, &flow).unwrap();
        assert!(flow.value > 0);
        assert_eq!(cut_capacity(&graph, &flow.source_side), flow.value);
    }
}

#[test]
fn large_capacities_do_not_overflow() {
    let mut builder = GraphBuilder::new(4);
    for mid in 1..3 {
        builder.add_edge(0, mid, u32::MAX);
        builder.add_edge(mid, 3, u32::MAX);
    }
    let graph = builder.build().unwrap();
    let flow = max_flow(&graph, n(0), n(3), &SolverConfig::default()).unwrap();
    assert_eq!(flow.value, 2 * FlowValue::from(u32::MAX));
}

proptest! {
    #[test]
    fn max_flow_equals_min_cut(graph in small_graph()) {
        let t = graph.node_count() as u32 - 1;
        let flow = max_flow(&graph, n(0), n(t), &SolverConfig::default()).unwrap();
        prop_assert_eq!(flow.value, brute_force_min_cut(&graph, 0, t as usize));
        prop_assert_eq!(cut_capacity(&graph, &flow.source_side), flow.value);
    }

    #[test]
    fn flow_is_conserved(graph in small_graph()) {
        let t = graph.node_count() as u32 - 1;
        let flow = max_flow(&graph, n(0), n(t), &SolverConfig::default()).unwrap();
        prop_assert!(verify_flow(&graph, &flow).is_ok());
    }

    #[test]
    fn solving_twice_gives_same_value(graph in small_graph()) {
        let t = graph.node_count() as u32 - 1;
        let a = max_flow(&graph, n(0), n(t), &SolverConfig::default()).unwrap();
        let b = max_flow(&graph, n(0), n(t), &SolverConfig::default()).unwrap();
        prop_assert_eq!(a, b);
    }
}
