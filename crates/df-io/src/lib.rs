//! df-io: file formats and dataset ingestion for dagflow.
//!
//! - `edgelist`: the `N` + `from to capacity` text format
//! - `flow_output`: per-edge flow result files
//! - `routes`: route lists (e.g. airport connections) to edge lists
//! - `pipeline`: semicolon-separated pipeline project CSVs to edge lists
//! - `config`: YAML run configuration

pub mod config;
pub mod edgelist;
pub mod error;
pub mod flow_output;
pub mod pipeline;
pub mod routes;

pub use config::{IngestConfig, RunConfig, load_config, save_config};
pub use edgelist::{
    EdgeList, format_edge_list, parse_edge_list, read_edge_list, write_edge_list,
};
pub use error::{IoError, IoResult};
pub use flow_output::{format_flow_assignment, write_flow_assignment};
pub use pipeline::{PipelineColumns, PipelineConversion, convert_pipeline_csv};
pub use routes::{ReversePolicy, RouteConversion, RouteOptions, convert_routes};
