//! df-synth: random capacitated DAG generation.
//!
//! Edges are drawn as distinct pairs `(u, v)` with `u < v`, so every
//! generated graph is acyclic by construction. Node 0 is given at least one
//! outgoing edge and node N-1 at least one incoming edge.

pub mod config;
pub mod error;
pub mod pairs;
pub mod synth;

pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use synth::{DagSynthesizer, SyntheticDag, generate};
