//! YAML run configuration.

use std::path::Path;

use df_graph::DuplicatePolicy;
use df_solver::SolverConfig;
use df_synth::SynthConfig;
use serde::{Deserialize, Serialize};

use crate::error::{IoError, IoResult};
use crate::routes::ReversePolicy;

/// How input datasets are turned into graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub reverse_policy: ReversePolicy,
    /// Route files number nodes from 1.
    pub one_based: bool,
}

/// Every section is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub synth: SynthConfig,
    pub solver: SolverConfig,
    pub ingest: IngestConfig,
}

impl RunConfig {
    pub fn from_yaml_str(text: &str) -> IoResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> IoResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn load_config(path: &Path) -> IoResult<RunConfig> {
    let content = std::fs::read_to_string(path).map_err(|err| IoError::Read {
        path: path.to_path_buf(),
        err,
    })?;
    let config = RunConfig::from_yaml_str(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded run config");
    Ok(config)
}

pub fn save_config(path: &Path, config: &RunConfig) -> IoResult<()> {
    let content = config.to_yaml_string()?;
    std::fs::write(path, content).map_err(|err| IoError::Write {
        path: path.to_path_buf(),
        err,
    })
}
