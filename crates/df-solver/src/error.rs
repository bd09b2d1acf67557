//! Error types for solver operations.

use df_core::{FlowValue, NodeId};
use df_graph::GraphError;
use thiserror::Error;

use crate::solution::MaxFlow;

/// Errors that can occur during a max-flow solve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid terminals: source and sink are both node {node}")]
    InvalidTerminals { node: NodeId },

    /// `partial` holds the per-edge flow reached so far; its `source_side`
    /// is empty because no cut exists yet.
    #[error(
        "Flow incomplete after {augmentations} augmenting paths (best flow so far: {best})"
    )]
    FlowIncomplete {
        best: FlowValue,
        augmentations: usize,
        partial: Box<MaxFlow>,
    },

    #[error("Flow check failed: {what}")]
    FlowViolation { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;
