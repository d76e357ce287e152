use crate::domain::model::{ArtifactNames, RunPlan, RunStamp, RunSummary};
use crate::domain::ports::{ConfigProvider, Publisher, TestRunner};
use crate::utils::error::{Result, RunError};
use std::path::PathBuf;

/// Runs the suite once and publishes the report if, and only if, the runner succeeded.
pub struct ReportEngine<C: ConfigProvider, R: TestRunner, P: Publisher> {
    config: C,
    runner: R,
    publisher: P,
}

impl<C: ConfigProvider, R: TestRunner, P: Publisher> ReportEngine<C, R, P> {
    pub fn new(config: C, runner: R, publisher: P) -> Self {
        Self {
            config,
            runner,
            publisher,
        }
    }

    pub fn plan(&self, stamp: RunStamp) -> RunPlan {
        let results_dir =
            PathBuf::from(self.config.results_root()).join(format!("run_{}", stamp));
        RunPlan {
            artifacts: ArtifactNames::for_stamp(&stamp),
            stamp,
            program: self.config.runner_program().to_string(),
            suite: PathBuf::from(self.config.suite_dir()),
            results_dir,
            publish_dir: PathBuf::from(self.config.publish_dir()),
            base_url: self.config.base_url().to_string(),
            headless: self.config.headless(),
        }
    }

    /// The plan rendered as pretty JSON, without touching the filesystem.
    pub fn dry_run(&self, stamp: RunStamp) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.plan(stamp))?)
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.run_with_stamp(RunStamp::now()).await
    }

    pub async fn run_with_stamp(&self, stamp: RunStamp) -> Result<RunSummary> {
        let plan = self.plan(stamp);
        tracing::info!("🕒 Run {}", plan.stamp);
        tracing::info!("📁 Results directory: {}", plan.results_dir.display());
        tokio::fs::create_dir_all(&plan.results_dir).await?;

        let exit = self.runner.run(&plan).await?;
        if !exit.success() {
            return Err(match exit.code {
                Some(code) => RunError::RunnerFailed { code },
                None => RunError::RunnerTerminated,
            });
        }
        tracing::info!("✅ Test runner finished successfully");

        let published = self.publisher.publish(&plan).await?;
        tracing::info!(
            "🌐 Published {} artifacts to {}",
            published.len(),
            plan.publish_dir.display()
        );

        Ok(RunSummary {
            stamp: plan.stamp,
            results_dir: plan.results_dir,
            published,
        })
    }
}
