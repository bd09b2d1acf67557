//! Maximum-flow solver for capacitated flow networks.
//!
//! Edmonds-Karp: repeated breadth-first augmenting paths over a residual
//! network that pairs every edge with a reverse arc. The solver is correct
//! on general digraphs; acyclicity is only a property of the expected inputs.

pub mod config;
pub mod edmonds_karp;
pub mod error;
pub mod residual;
pub mod solution;
pub mod verify;

pub use config::SolverConfig;
pub use edmonds_karp::{EdmondsKarp, max_flow};
pub use error::{SolverError, SolverResult};
pub use solution::{EdgeFlow, MaxFlow};
pub use verify::{cut_capacity, verify_flow};
