//! Route lists (e.g. airport connections) to edge lists.
//!
//! Input lines are `<a> <b> <capacity>`. Ids may be 1-based, in which case
//! they are shifted down to 0-based node ids.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use df_core::{Capacity, NodeId};
use df_graph::Edge;
use serde::{Deserialize, Serialize};

use crate::edgelist::EdgeList;
use crate::error::{IoError, IoResult, parse_err};

/// What to do with a route `(b, a)` whose reverse `(a, b)` is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversePolicy {
    /// Keep both directions as independent edges.
    #[default]
    KeepBoth,
    /// Drop `(b, a)` when `(a, b)` was kept earlier in the file.
    KeepFirstSeen,
}

impl fmt::Display for ReversePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversePolicy::KeepBoth => f.write_str("keep-both"),
            ReversePolicy::KeepFirstSeen => f.write_str("keep-first-seen"),
        }
    }
}

impl FromStr for ReversePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep-both" | "keep_both" => Ok(ReversePolicy::KeepBoth),
            "keep-first-seen" | "keep_first_seen" => Ok(ReversePolicy::KeepFirstSeen),
            other => Err(format!(
                "unknown reverse policy '{other}' (expected keep-both or keep-first-seen)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    pub one_based: bool,
    pub reverse_policy: ReversePolicy,
    /// Node count of the output. `None` uses max id + 1.
    pub num_nodes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConversion {
    pub edge_list: EdgeList,
    /// Routes dropped because their reverse was already kept.
    pub dropped_reverse: usize,
    /// Routes from a node to itself, which a flow network cannot hold.
    pub dropped_self_loops: usize,
}

fn parse_id(raw: Option<&str>, line: usize, one_based: bool) -> IoResult<u32> {
    let raw = raw.ok_or_else(|| parse_err(line, "expected 3 fields"))?;
    let id: u32 = raw
        .parse()
        .map_err(|_| parse_err(line, format!("invalid node id '{raw}'")))?;
    let id = if one_based {
        id.checked_sub(1)
            .ok_or_else(|| parse_err(line, "node id 0 in a 1-based route list"))?
    } else {
        id
    };
    if NodeId::try_from_index(id).is_none() {
        return Err(parse_err(line, format!("node id '{raw}' exceeds the node id range")));
    }
    Ok(id)
}

/// Convert route-list text into an edge list.
pub fn convert_routes(text: &str, options: &RouteOptions) -> IoResult<RouteConversion> {
    let mut kept: HashSet<(u32, u32)> = HashSet::new();
    let mut edges = Vec::new();
    let mut dropped_reverse = 0;
    let mut dropped_self_loops = 0;
    let mut max_id: Option<u32> = None;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let a = parse_id(Some(first), line_no, options.one_based)?;
        let b = parse_id(fields.next(), line_no, options.one_based)?;
        let raw_cap = fields
            .next()
            .ok_or_else(|| parse_err(line_no, "expected 3 fields"))?;
        let capacity: Capacity = raw_cap
            .parse()
            .map_err(|_| parse_err(line_no, format!("invalid capacity '{raw_cap}'")))?;
        if fields.next().is_some() {
            return Err(parse_err(line_no, "expected 3 fields"));
        }

        max_id = Some(max_id.map_or(a.max(b), |m| m.max(a).max(b)));

        if a == b {
            dropped_self_loops += 1;
            continue;
        }
        if options.reverse_policy == ReversePolicy::KeepFirstSeen && kept.contains(&(b, a)) {
            tracing::debug!(from = a, to = b, line = line_no, "dropping reverse route");
            dropped_reverse += 1;
            continue;
        }
        kept.insert((a, b));
        edges.push(Edge::from_indices(a, b, capacity));
    }

    let implied = max_id.map_or(0, |m| m as usize + 1);
    let num_nodes = match options.num_nodes {
        Some(n) if n > NodeId::MAX_NODE_COUNT => {
            return Err(IoError::Invalid {
                what: format!("node count {n} exceeds {}", NodeId::MAX_NODE_COUNT),
            });
        }
        Some(n) if n < implied => {
            return Err(IoError::Invalid {
                what: format!("node count {n} is smaller than the highest id + 1 ({implied})"),
            });
        }
        Some(n) => n,
        None => implied,
    };

    tracing::info!(
        nodes = num_nodes,
        edges = edges.len(),
        dropped_reverse,
        dropped_self_loops,
        "converted route list"
    );

    Ok(RouteConversion {
        edge_list: EdgeList::new(num_nodes, edges),
        dropped_reverse,
        dropped_self_loops,
    })
}
