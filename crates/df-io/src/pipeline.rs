//! Pipeline project CSVs to edge lists.
//!
//! The input is semicolon-separated with a header row. Each project row
//! adds capacity between a beginning and an ending region; regions become
//! node ids in the order they are first seen.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Read;

use df_core::{Capacity, NodeId};
use df_graph::Edge;

use crate::edgelist::EdgeList;
use crate::error::{IoError, IoResult, parse_err};

const BOM: char = '\u{feff}';

/// Header names of the columns the conversion reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineColumns {
    pub from: String,
    pub to: String,
    pub capacity: String,
}

impl Default for PipelineColumns {
    fn default() -> Self {
        Self {
            from: "Beg_Region".to_string(),
            to: "End_Region".to_string(),
            capacity: "Added Capacity".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConversion {
    pub edge_list: EdgeList,
    /// Region name of each node id.
    pub regions: Vec<String>,
    /// Rows with an empty beginning or ending region.
    pub skipped_rows: usize,
    /// Rows whose beginning and ending region are the same.
    pub self_loops: usize,
}

impl PipelineConversion {
    /// `<id> <region>` per line.
    pub fn format_regions(&self) -> String {
        let mut out = String::new();
        for (id, name) in self.regions.iter().enumerate() {
            let _ = writeln!(out, "{id} {name}");
        }
        out
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches(BOM).trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
        })
}

/// Parse a capacity cell: thousands separators are ignored, empty is zero.
fn parse_capacity(raw: &str, line: usize) -> IoResult<Capacity> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '_'))
        .collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| parse_err(line, format!("invalid capacity '{raw}'")))
}

struct RegionTable {
    ids: HashMap<String, u32>,
    names: Vec<String>,
}

impl RegionTable {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }

    fn intern(&mut self, name: &str) -> IoResult<u32> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let id = u32::try_from(self.names.len())
            .ok()
            .filter(|&id| NodeId::try_from_index(id).is_some())
            .ok_or_else(|| IoError::Invalid {
                what: format!("more than {} regions", NodeId::MAX_NODE_COUNT),
            })?;
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        Ok(id)
    }
}

/// Convert a pipeline project CSV into an edge list over regions.
pub fn convert_pipeline_csv<R: Read>(
    reader: R,
    columns: &PipelineColumns,
) -> IoResult<PipelineConversion> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let from_col = column_index(&headers, &columns.from)?;
    let to_col = column_index(&headers, &columns.to)?;
    let cap_col = column_index(&headers, &columns.capacity)?;

    let mut regions = RegionTable::new();
    let mut edges = Vec::new();
    let mut skipped_rows = 0;
    let mut self_loops = 0;

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let from = record.get(from_col).unwrap_or("").trim();
        let to = record.get(to_col).unwrap_or("").trim();
        if from.is_empty() || to.is_empty() {
            skipped_rows += 1;
            continue;
        }

        let capacity = parse_capacity(record.get(cap_col).unwrap_or(""), line)?;
        let a = regions.intern(from)?;
        let b = regions.intern(to)?;
        if a == b {
            self_loops += 1;
            continue;
        }
        edges.push(Edge::from_indices(a, b, capacity));
    }

    tracing::info!(
        regions = regions.names.len(),
        edges = edges.len(),
        skipped_rows,
        self_loops,
        "converted pipeline csv"
    );

    Ok(PipelineConversion {
        edge_list: EdgeList::new(regions.names.len(), edges),
        regions: regions.names,
        skipped_rows,
        self_loops,
    })
}
