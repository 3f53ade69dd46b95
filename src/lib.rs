pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{etl::EtlEngine, pipeline::PhonePipeline};
pub use domain::model::{CellValue, ExportSummary, MatchSet, RunOutcome, RunReport, Sheet};
pub use utils::error::{EtlError, Result};
