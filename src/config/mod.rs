#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::Serialize;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_RUNNER: &str = "robot";
pub const DEFAULT_SUITE: &str = "tests";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_PUBLISH_DIR: &str = "docs";

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub runner: Option<String>,
    pub suite: Option<String>,
    pub results_dir: Option<String>,
    pub publish_dir: Option<String>,
    pub headless: Option<bool>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSettings {
    pub base_url: String,
    pub runner: String,
    pub suite: String,
    pub results_dir: String,
    pub publish_dir: String,
    pub headless: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            runner: DEFAULT_RUNNER.to_string(),
            suite: DEFAULT_SUITE.to_string(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            publish_dir: DEFAULT_PUBLISH_DIR.to_string(),
            headless: true,
        }
    }
}

impl RunSettings {
    /// Command-line values win over the file, the file wins over defaults.
    pub fn resolve(overrides: Overrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            base_url: overrides
                .base_url
                .or(file.run.base_url)
                .unwrap_or(defaults.base_url),
            runner: overrides
                .runner
                .or(file.runner.program)
                .unwrap_or(defaults.runner),
            suite: overrides
                .suite
                .or(file.runner.suite)
                .unwrap_or(defaults.suite),
            results_dir: overrides
                .results_dir
                .or(file.run.results_dir)
                .unwrap_or(defaults.results_dir),
            publish_dir: overrides
                .publish_dir
                .or(file.publish.dir)
                .unwrap_or(defaults.publish_dir),
            headless: overrides
                .headless
                .or(file.run.headless)
                .unwrap_or(defaults.headless),
        }
    }
}

impl ConfigProvider for RunSettings {
    fn runner_program(&self) -> &str {
        &self.runner
    }

    fn suite_dir(&self) -> &str {
        &self.suite
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headless(&self) -> bool {
        self.headless
    }

    fn results_root(&self) -> &str {
        &self.results_dir
    }

    fn publish_dir(&self) -> &str {
        &self.publish_dir
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("runner", &self.runner)?;
        validation::validate_path("suite", &self.suite)?;
        validation::validate_path("results_dir", &self.results_dir)?;
        validation::validate_path("publish_dir", &self.publish_dir)?;
        Ok(())
    }
}
