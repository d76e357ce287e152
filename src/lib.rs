pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalPublisher, ProcessRunner};
pub use config::{toml_config::TomlConfig, Overrides, RunSettings};
pub use crate::core::engine::ReportEngine;
pub use utils::error::{Result, RunError};
