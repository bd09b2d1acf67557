//! Error types for DAG synthesis.

use df_graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    #[error("Invalid synthesizer config: {what}")]
    InvalidConfig { what: String },

    #[error("Too many edges: requested {requested}, a DAG on {num_nodes} nodes has at most {max}")]
    TooManyEdges {
        requested: usize,
        num_nodes: usize,
        max: u64,
    },

    #[error("Failed to generate a valid DAG: {reason}")]
    GenerationFailed { reason: &'static str },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SynthResult<T> = Result<T, SynthError>;
