//! Property tests for generated DAGs.

use std::collections::HashSet;

use df_graph::{is_acyclic, reach};
use df_synth::{SynthConfig, generate};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = SynthConfig> {
    (2usize..40, 0.0f64..=1.0, 1u32..50, 0u32..50, any::<u64>()).prop_map(
        |(n, density, min_cap, spread, seed)| {
            let max_edges = n * (n - 1) / 2;
            let m = (max_edges as f64 * density) as usize;
            SynthConfig::new(n, m)
                .with_capacity_range(min_cap, min_cap + spread)
                .with_seed(seed)
        },
    )
}

proptest! {
    #[test]
    fn generated_graphs_satisfy_dag_invariants(cfg in config_strategy()) {
        let dag = generate(&cfg).unwrap();
        let graph = dag.to_graph().unwrap();

        prop_assert!(is_acyclic(&graph));
        prop_assert!(graph.out_degree(dag.source()) >= 1);
        prop_assert!(graph.in_degree(dag.sink()) >= 1);
        prop_assert!(reach::is_reachable(&graph, dag.source(), dag.sink()));
        prop_assert!(dag.edges.len() >= cfg.num_edges);
        prop_assert_eq!(graph.node_count(), cfg.num_nodes);

        for edge in &dag.edges {
            prop_assert!(edge.from < edge.to);
            prop_assert!(edge.capacity >= cfg.min_cap && edge.capacity <= cfg.max_cap);
        }
    }

    #[test]
    fn generated_edges_are_distinct(cfg in config_strategy()) {
        let dag = generate(&cfg).unwrap();
        let keys: HashSet<_> = dag.edges.iter().map(|e| e.key()).collect();
        prop_assert_eq!(keys.len(), dag.edges.len());
        prop_assert_eq!(dag.to_graph().unwrap().edge_count(), dag.edges.len());
    }
}

#[test]
fn large_sparse_generation() {
    let cfg = SynthConfig::new(20_000, 60_000).with_seed(2024);
    let dag = generate(&cfg).unwrap();
    assert!(dag.edges.len() >= 60_000);
    assert!(is_acyclic(&dag.to_graph().unwrap()));
}
