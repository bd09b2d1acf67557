//! Residual network.
//!
//! Edge `i` of the [`EdgeIndex`] owns arcs `2i` (forward, starts at the edge
//! capacity) and `2i + 1` (reverse, starts at 0). Pushing flow along an arc
//! moves residual capacity onto its partner, which is what allows later
//! paths to cancel earlier flow.

use df_core::{FlowValue, NodeId};
use df_graph::EdgeIndex;

#[derive(Debug, Clone)]
pub struct ResidualNetwork {
    /// Target node of each arc.
    head: Vec<NodeId>,
    /// Remaining capacity of each arc.
    residual: Vec<FlowValue>,
    /// Node i's arcs are `arcs[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,
    arcs: Vec<usize>,
}

impl ResidualNetwork {
    pub fn new(index: &EdgeIndex) -> Self {
        let node_count = index.node_count();
        let mut head = Vec::with_capacity(2 * index.len());
        let mut residual = Vec::with_capacity(2 * index.len());
        let mut degree = vec![0usize; node_count];

        for edge in index.edges() {
            head.push(edge.to);
            residual.push(FlowValue::from(edge.capacity));
            head.push(edge.from);
            residual.push(0);
            degree[edge.from.as_usize()] += 1;
            degree[edge.to.as_usize()] += 1;
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        for d in &degree {
            offsets.push(offsets[offsets.len() - 1] + d);
        }

        let mut fill = offsets[..node_count].to_vec();
        let mut arcs = vec![0usize; 2 * index.len()];
        for (i, edge) in index.edges().iter().enumerate() {
            let u = edge.from.as_usize();
            arcs[fill[u]] = 2 * i;
            fill[u] += 1;
            let v = edge.to.as_usize();
            arcs[fill[v]] = 2 * i + 1;
            fill[v] += 1;
        }

        Self {
            head,
            residual,
            offsets,
            arcs,
        }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Arcs leaving `node` (forward arcs of its out-edges, reverse arcs of its in-edges).
    pub fn arcs_from(&self, node: NodeId) -> &[usize] {
        let i = node.as_usize();
        &self.arcs[self.offsets[i]..self.offsets[i + 1]]
    }

    pub fn head(&self, arc: usize) -> NodeId {
        self.head[arc]
    }

    /// Node the arc starts from (the head of its partner arc).
    pub fn tail(&self, arc: usize) -> NodeId {
        self.head[arc ^ 1]
    }

    pub fn residual(&self, arc: usize) -> FlowValue {
        self.residual[arc]
    }

    /// Push `amount` along `arc`. Callers keep `amount <= residual(arc)`.
    pub fn push(&mut self, arc: usize, amount: FlowValue) {
        self.residual[arc] -= amount;
        self.residual[arc ^ 1] += amount;
    }

    /// Net flow on indexed edge `i`: the residual accumulated on its reverse arc.
    pub fn edge_flow(&self, i: usize) -> FlowValue {
        self.residual[2 * i + 1]
    }
}
