pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::ReportPipeline};
pub use domain::model::{
    Completion, CompletionCounts, ExpiringPerson, ExpiringTraining, FiscalYearRoster,
    OutputFiles, Person, ReportConfig, ReportSet, TrainingStatus,
};
pub use domain::services::{count_completions, filter_by_fiscal_year, find_expiring};
pub use utils::error::{ReportError, Result};
