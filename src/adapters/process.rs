use crate::domain::model::{RunPlan, RunnerExit};
use crate::domain::ports::TestRunner;
use crate::utils::error::{Result, RunError};
use async_trait::async_trait;
use tokio::process::Command;

/// Launches the test runner as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(plan: &RunPlan) -> Command {
        let mut command = Command::new(&plan.program);
        command.args(plan.runner_args());
        command
    }
}

#[async_trait]
impl TestRunner for ProcessRunner {
    async fn run(&self, plan: &RunPlan) -> Result<RunnerExit> {
        tracing::info!("▶️  Launching {} against {}", plan.program, plan.suite.display());
        tracing::debug!("Runner arguments: {:?}", plan.runner_args());

        let status = Self::command(plan)
            .status()
            .await
            .map_err(|source| RunError::RunnerLaunchError {
                program: plan.program.clone(),
                source,
            })?;

        tracing::debug!("Runner exited with {}", status);
        Ok(RunnerExit {
            code: status.code(),
        })
    }
}
