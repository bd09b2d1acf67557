//! The DAG synthesizer.

use df_core::{Capacity, NodeId};
use df_graph::{Edge, FlowGraph, GraphBuilder, is_acyclic, reach};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SynthConfig;
use crate::error::{SynthError, SynthResult};
use crate::pairs::sample_pairs;

/// A generated edge list over `num_nodes` nodes.
///
/// Source is node 0 and sink is node `num_nodes - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticDag {
    pub num_nodes: usize,
    pub edges: Vec<Edge>,
    /// Edges sampled before boundary repair.
    pub sampled_edges: usize,
}

impl SyntheticDag {
    pub fn source(&self) -> NodeId {
        NodeId::from_index(0)
    }

    pub fn sink(&self) -> NodeId {
        NodeId::from_index(self.num_nodes as u32 - 1)
    }

    /// Edges added by boundary repair (source out-edge, sink in-edge, and
    /// the link that makes the sink reachable when sampling left it cut off).
    pub fn boundary_edges(&self) -> usize {
        self.edges.len() - self.sampled_edges
    }

    /// Populate a graph store with the generated edges.
    pub fn to_graph(&self) -> SynthResult<FlowGraph> {
        let mut builder = GraphBuilder::new(self.num_nodes);
        builder.extend(
            self.edges
                .iter()
                .map(|e| (e.from.index(), e.to.index(), e.capacity)),
        );
        Ok(builder.build()?)
    }
}

/// Random DAG generator driven by an explicit RNG.
pub struct DagSynthesizer<R> {
    config: SynthConfig,
    rng: R,
}

impl DagSynthesizer<StdRng> {
    /// Seeded from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: SynthConfig) -> SynthResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> DagSynthesizer<R> {
    pub fn with_rng(config: SynthConfig, rng: R) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    fn capacity(&mut self) -> Capacity {
        self.rng.gen_range(self.config.min_cap..=self.config.max_cap)
    }

    /// Generate one DAG. Each call draws a fresh graph from the RNG stream.
    pub fn generate(&mut self) -> SynthResult<SyntheticDag> {
        let n = self.config.num_nodes;
        let source = NodeId::from_index(0);
        let sink = NodeId::from_index(n as u32 - 1);

        let pairs = sample_pairs(&mut self.rng, n, self.config.num_edges);
        let mut edges = Vec::with_capacity(pairs.len() + 2);
        for (u, v) in pairs {
            let capacity = self.capacity();
            edges.push(Edge::from_indices(u, v, capacity));
        }
        let sampled_edges = edges.len();

        while !edges.iter().any(|e| e.from == source) {
            let v = self.rng.gen_range(1..n as u32);
            let capacity = self.capacity();
            edges.push(Edge::new(source, NodeId::from_index(v), capacity));
        }
        while !edges.iter().any(|e| e.to == sink) {
            let u = self.rng.gen_range(0..n as u32 - 1);
            let capacity = self.capacity();
            edges.push(Edge::new(NodeId::from_index(u), sink, capacity));
        }

        let mut dag = SyntheticDag {
            num_nodes: n,
            edges,
            sampled_edges,
        };

        let mut graph = dag.to_graph()?;
        let reachable = reach::reachable_set(&graph, source);
        if !reachable[sink.as_usize()] {
            // Every node reachable from the source sits below the sink, so
            // linking one of them to the sink keeps the order intact.
            let candidates: Vec<u32> = (0..n as u32 - 1)
                .filter(|&u| reachable[u as usize])
                .collect();
            let u = candidates[self.rng.gen_range(0..candidates.len())];
            let edge = Edge::new(NodeId::from_index(u), sink, self.capacity());
            graph.insert(edge)?;
            dag.edges.push(edge);
            tracing::debug!(from = u, "linked source component to sink");
        }

        if !is_acyclic(&graph) {
            return Err(SynthError::GenerationFailed {
                reason: "generated graph contains a cycle",
            });
        }
        if !reach::is_reachable(&graph, source, sink) {
            return Err(SynthError::GenerationFailed {
                reason: "sink is not reachable from source",
            });
        }

        tracing::info!(
            nodes = n,
            edges = dag.edges.len(),
            boundary = dag.boundary_edges(),
            "generated DAG"
        );
        Ok(dag)
    }
}

/// Generate one DAG from `config`.
pub fn generate(config: &SynthConfig) -> SynthResult<SyntheticDag> {
    DagSynthesizer::from_config(config.clone())?.generate()
}
