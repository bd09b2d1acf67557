/// Per-edge capacity. Synthesized capacities are small; ingested data may be larger.
pub type Capacity = u32;

/// Flow totals. Wide enough for `num_edges * Capacity::MAX` without overflow.
pub type FlowValue = u64;

/// Number of unordered node pairs `C(n, 2)`, i.e. the edge bound of a DAG on `n` nodes.
pub fn pair_count(num_nodes: usize) -> u64 {
    let n = num_nodes as u64;
    n * n.saturating_sub(1) / 2
}

/// Sum capacities in `FlowValue` width.
pub fn total_capacity<I>(caps: I) -> FlowValue
where
    I: IntoIterator<Item = Capacity>,
{
    caps.into_iter().map(FlowValue::from).sum()
}
