//! Error types for file formats and ingestion.

use std::path::PathBuf;

use df_graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Parse error on line {line}: {what}")]
    Parse { line: usize, what: String },

    #[error("Invalid input: {what}")]
    Invalid { what: String },

    #[error("Missing column: {name}")]
    MissingColumn { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type IoResult<T> = Result<T, IoError>;

pub(crate) fn parse_err(line: usize, what: impl Into<String>) -> IoError {
    IoError::Parse {
        line,
        what: what.into(),
    }
}
