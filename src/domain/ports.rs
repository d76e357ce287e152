use crate::domain::model::{RunPlan, RunnerExit};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait ConfigProvider: Send + Sync {
    fn runner_program(&self) -> &str;
    fn suite_dir(&self) -> &str;
    fn base_url(&self) -> &str;
    fn headless(&self) -> bool;
    fn results_root(&self) -> &str;
    fn publish_dir(&self) -> &str;
}

#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Runs the suite described by `plan` and waits for the process to exit.
    async fn run(&self, plan: &RunPlan) -> Result<RunnerExit>;
}

pub trait Publisher: Send + Sync {
    fn publish(
        &self,
        plan: &RunPlan,
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>>> + Send;
}
