//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Max-flow solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on augmenting paths. `None` runs to convergence.
    ///
    /// When the bound is hit while another augmenting path still exists, the
    /// solve fails with `FlowIncomplete` carrying the flow found so far.
    pub max_augmentations: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_augmentations(mut self, limit: usize) -> Self {
        self.max_augmentations = Some(limit);
        self
    }
}
