//! Per-edge flow result files: one `<from> <to> <flow>` line per edge.

use std::path::Path;

use df_solver::MaxFlow;

use crate::error::{IoError, IoResult};

pub fn format_flow_assignment(flow: &MaxFlow) -> String {
    flow.edge_flows
        .iter()
        .map(|ef| format!("{} {} {}\n", ef.edge.from, ef.edge.to, ef.flow))
        .collect()
}

pub fn write_flow_assignment(path: &Path, flow: &MaxFlow) -> IoResult<()> {
    std::fs::write(path, format_flow_assignment(flow)).map_err(|err| IoError::Write {
        path: path.to_path_buf(),
        err,
    })
}
