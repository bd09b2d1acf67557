//! Synthesizer parameters.

use df_core::{Capacity, pair_count};
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Parameters for one generated DAG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Number of nodes N (at least 2).
    pub num_nodes: usize,
    /// Edges to sample before boundary repair.
    pub num_edges: usize,
    /// Minimum edge capacity (at least 1).
    pub min_cap: Capacity,
    /// Maximum edge capacity (inclusive).
    pub max_cap: Capacity,
    /// RNG seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            num_nodes: 1000,
            num_edges: 6000,
            min_cap: 1,
            max_cap: 100,
            seed: None,
        }
    }
}

impl SynthConfig {
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            num_edges,
            ..Self::default()
        }
    }

    pub fn with_capacity_range(mut self, min_cap: Capacity, max_cap: Capacity) -> Self {
        self.min_cap = min_cap;
        self.max_cap = max_cap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameters before any sampling happens.
    pub fn validate(&self) -> SynthResult<()> {
        if self.num_nodes < 2 {
            return Err(SynthError::InvalidConfig {
                what: format!("num_nodes must be at least 2 (got {})", self.num_nodes),
            });
        }
        if u32::try_from(self.num_nodes).is_err() {
            return Err(SynthError::InvalidConfig {
                what: format!("num_nodes {} exceeds the node id range", self.num_nodes),
            });
        }
        if self.min_cap == 0 {
            return Err(SynthError::InvalidConfig {
                what: "min_cap must be at least 1".to_string(),
            });
        }
        if self.min_cap > self.max_cap {
            return Err(SynthError::InvalidConfig {
                what: format!(
                    "min_cap {} is greater than max_cap {}",
                    self.min_cap, self.max_cap
                ),
            });
        }
        let max = pair_count(self.num_nodes);
        if self.num_edges as u64 > max {
            return Err(SynthError::TooManyEdges {
                requested: self.num_edges,
                num_nodes: self.num_nodes,
                max,
            });
        }
        Ok(())
    }
}
