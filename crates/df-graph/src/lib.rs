//! df-graph: capacitated flow-network layer for dagflow.
//!
//! Provides:
//! - The graph store (`FlowGraph`): at most one edge per ordered pair
//! - Edge-list builder with an explicit duplicate policy
//! - Stable edge indexing for solver integration
//! - Acyclicity checks, cycle repair, and source/sink reachability
//!
//! # Example
//!
//! ```
//! use df_graph::{GraphBuilder, repair, reach};
//! use df_core::NodeId;
//!
//! let mut graph = GraphBuilder::new(3)
//!     .edge(0, 1, 4)
//!     .edge(1, 2, 4)
//!     .edge(2, 0, 1)
//!     .build()
//!     .unwrap();
//!
//! let report = repair::remove_cycles(&mut graph);
//! assert_eq!(report.removed().len(), 1);
//! assert!(df_graph::is_acyclic(&graph));
//! assert!(reach::is_reachable(&graph, NodeId::from_index(0), NodeId::from_index(2)));
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod reach;
pub mod repair;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{DuplicatePolicy, GraphBuilder};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::FlowGraph;
pub use indexing::EdgeIndex;
pub use repair::RepairReport;
pub use validate::{find_cycle, is_acyclic, topological_order};
