//! Plain-text edge-list format.
//!
//! ```text
//! 4
//! 0 1 10
//! 0 2 5
//! 1 3 10
//! 2 3 5
//! ```
//!
//! Line 1 is the node count N; every following line is one directed edge
//! `<from> <to> <capacity>`. Blank lines are skipped on read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use df_core::{Capacity, NodeId};
use df_graph::{DuplicatePolicy, Edge, FlowGraph, GraphBuilder};

use crate::error::{IoError, IoResult, parse_err};

/// Node count plus raw edges, as stored on disk.
///
/// Edges are not validated until [`EdgeList::to_graph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub num_nodes: usize,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(num_nodes: usize, edges: Vec<Edge>) -> Self {
        Self { num_nodes, edges }
    }

    pub fn from_graph(graph: &FlowGraph) -> Self {
        Self::new(graph.node_count(), graph.to_edge_list())
    }

    /// Validate the edges into a graph store, merging duplicates with `policy`.
    pub fn to_graph(&self, policy: DuplicatePolicy) -> IoResult<FlowGraph> {
        let mut builder = GraphBuilder::new(self.num_nodes).with_policy(policy);
        builder.extend(
            self.edges
                .iter()
                .map(|e| (e.from.index(), e.to.index(), e.capacity)),
        );
        Ok(builder.build()?)
    }
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    line: usize,
    name: &str,
) -> IoResult<T> {
    let raw = field.ok_or_else(|| parse_err(line, format!("missing {name}")))?;
    raw.parse()
        .map_err(|_| parse_err(line, format!("invalid {name} '{raw}'")))
}

/// Parse a node id, rejecting values past the `NodeId` range so the error
/// names the id as written.
pub(crate) fn parse_node_id(field: Option<&str>, line: usize, name: &str) -> IoResult<u32> {
    let id: u32 = parse_field(field, line, name)?;
    if NodeId::try_from_index(id).is_none() {
        return Err(parse_err(
            line,
            format!("{name} {id} exceeds the node id range"),
        ));
    }
    Ok(id)
}

fn parse_lines<I>(lines: I) -> IoResult<EdgeList>
where
    I: IntoIterator<Item = IoResult<String>>,
{
    let mut num_nodes = None;
    let mut edges = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };

        if num_nodes.is_none() {
            let count: usize = parse_field(Some(first), line_no, "node count")?;
            if count > NodeId::MAX_NODE_COUNT {
                return Err(parse_err(
                    line_no,
                    format!("node count {count} exceeds {}", NodeId::MAX_NODE_COUNT),
                ));
            }
            num_nodes = Some(count);
            if fields.next().is_some() {
                return Err(parse_err(line_no, "node count line has extra fields"));
            }
            continue;
        }

        let from = parse_node_id(Some(first), line_no, "source node")?;
        let to = parse_node_id(fields.next(), line_no, "target node")?;
        let capacity: Capacity = parse_field(fields.next(), line_no, "capacity")?;
        if fields.next().is_some() {
            return Err(parse_err(line_no, "expected 3 fields"));
        }
        edges.push(Edge::from_indices(from, to, capacity));
    }

    let num_nodes = num_nodes.ok_or_else(|| parse_err(1, "missing node count"))?;
    Ok(EdgeList { num_nodes, edges })
}

/// Parse edge-list text.
pub fn parse_edge_list(text: &str) -> IoResult<EdgeList> {
    parse_lines(text.lines().map(|l| Ok(l.to_string())))
}

/// Read an edge-list file.
pub fn read_edge_list(path: &Path) -> IoResult<EdgeList> {
    let file = File::open(path).map_err(|err| IoError::Read {
        path: path.to_path_buf(),
        err,
    })?;
    let list = parse_lines(BufReader::new(file).lines().map(|l| l.map_err(IoError::from)))?;
    tracing::debug!(
        path = %path.display(),
        nodes = list.num_nodes,
        edges = list.edges.len(),
        "read edge list"
    );
    Ok(list)
}

/// Render an edge list in the on-disk format.
pub fn format_edge_list(num_nodes: usize, edges: &[Edge]) -> String {
    let mut out = format!("{num_nodes}\n");
    out.extend(
        edges
            .iter()
            .map(|e| format!("{} {} {}\n", e.from, e.to, e.capacity)),
    );
    out
}

/// Write an edge-list file.
pub fn write_edge_list(path: &Path, num_nodes: usize, edges: &[Edge]) -> IoResult<()> {
    std::fs::write(path, format_edge_list(num_nodes, edges)).map_err(|err| IoError::Write {
        path: path.to_path_buf(),
        err,
    })?;
    tracing::debug!(path = %path.display(), edges = edges.len(), "wrote edge list");
    Ok(())
}
