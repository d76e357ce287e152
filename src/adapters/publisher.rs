use crate::domain::model::{ArtifactKind, RunPlan};
use crate::domain::ports::Publisher;
use crate::utils::error::{Result, RunError};
use std::path::PathBuf;
use tokio::fs;

/// Copies a run's artifacts into the publishing directory under their fixed names.
#[derive(Debug, Clone, Default)]
pub struct LocalPublisher;

impl LocalPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl Publisher for LocalPublisher {
    async fn publish(&self, plan: &RunPlan) -> Result<Vec<PathBuf>> {
        // All three must exist before anything is overwritten.
        for kind in ArtifactKind::ALL {
            let source = plan.artifact_path(kind);
            if !fs::try_exists(&source).await? {
                return Err(RunError::ArtifactMissing { path: source });
            }
        }

        fs::create_dir_all(&plan.publish_dir)
            .await
            .map_err(|source| RunError::PublishError {
                path: plan.publish_dir.clone(),
                source,
            })?;

        // Stage every copy first so a failed copy leaves the previous report intact.
        let mut staged = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let source = plan.artifact_path(kind);
            let staging = staging_path(plan, kind);
            if let Err(e) = fs::copy(&source, &staging).await {
                discard(&staged).await;
                return Err(RunError::PublishError {
                    path: staging,
                    source: e,
                });
            }
            staged.push((kind, staging));
        }

        let mut published = Vec::with_capacity(staged.len());
        for (kind, staging) in &staged {
            let target = plan.published_path(*kind);
            fs::rename(staging, &target)
                .await
                .map_err(|e| RunError::PublishError {
                    path: target.clone(),
                    source: e,
                })?;
            tracing::info!(
                "📄 {} -> {}",
                plan.artifact_path(*kind).display(),
                target.display()
            );
            published.push(target);
        }

        Ok(published)
    }
}

/// Hidden sibling of the published file, e.g. `docs/.report.html.partial`.
fn staging_path(plan: &RunPlan, kind: ArtifactKind) -> PathBuf {
    plan.publish_dir
        .join(format!(".{}.partial", kind.published_file_name()))
}

async fn discard(staged: &[(ArtifactKind, PathBuf)]) {
    for (_, path) in staged {
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!("Could not remove {}: {}", path.display(), e);
        }
    }
}
