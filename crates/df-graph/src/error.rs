//! Graph-specific error types.

use df_core::NodeId;

/// Graph construction, validation and query errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge endpoint outside `[0, N)` or a self-loop.
    InvalidEdge {
        from: u32,
        to: u32,
        reason: InvalidEdgeReason,
    },

    /// A query referenced a node outside `[0, N)`.
    InvalidNode { node: u32, node_count: usize },

    /// The sink cannot be reached from the source.
    NoPath { source: NodeId, sink: NodeId },

    /// Edge not present in an edge index.
    EdgeNotFound { from: NodeId, to: NodeId },

    /// More nodes than `NodeId` can address, or than can be allocated.
    NodeCountTooLarge { node_count: usize },
}

/// Why an edge was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEdgeReason {
    SelfLoop,
    OutOfRange { node_count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidEdge { from, to, reason } => match reason {
                InvalidEdgeReason::SelfLoop => {
                    write!(f, "Invalid edge {} -> {}: self-loops are not allowed", from, to)
                }
                InvalidEdgeReason::OutOfRange { node_count } => write!(
                    f,
                    "Invalid edge {} -> {}: endpoint outside [0, {})",
                    from, to, node_count
                ),
            },
            GraphError::InvalidNode { node, node_count } => {
                write!(f, "Node {} outside [0, {})", node, node_count)
            }
            GraphError::NoPath { source, sink } => {
                write!(f, "No path from source {} to sink {}", source, sink)
            }
            GraphError::EdgeNotFound { from, to } => {
                write!(f, "Edge {} -> {} not found in edge index", from, to)
            }
            GraphError::NodeCountTooLarge { node_count } => {
                write!(f, "Node count {} is too large", node_count)
            }
        }
    }
}

impl std::error::Error for GraphError {}
