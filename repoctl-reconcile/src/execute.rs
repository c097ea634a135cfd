use repoctl_core::{
    change::{ChangeRecord, Level, PreviewArtifact},
    repository::{RepoId, Repository},
};
use serde_json::json;

use crate::{
    access::{AccessError, RepositoryAccess, UpdateParams},
    log::Logger,
};

/// Component name recorded in preview artifacts.
pub const SOURCE: &str = "archive";

/// How a decided change is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    /// Send the update to the remote.
    Apply,
    /// Describe the update without sending it.
    Preview,
}

/// Result of executing one change.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied {
        repo: RepoId,
        change: ChangeRecord,
        response: Repository,
    },
    Previewed(PreviewArtifact),
}

impl Executor {
    pub async fn execute(
        &self,
        access: &dyn RepositoryAccess,
        logger: &dyn Logger,
        params: UpdateParams,
        change: ChangeRecord,
    ) -> Result<Outcome, AccessError> {
        match self {
            Executor::Preview => Ok(Outcome::Previewed(PreviewArtifact {
                source: SOURCE.to_string(),
                resource: params.repo.clone(),
                endpoint: access.update_endpoint(&params),
                change,
                level: Level::Info,
            })),
            Executor::Apply => {
                let response = access.update(&params).await?;
                let action = if params.archived { "archived" } else { "unarchived" };
                logger.debug(
                    &json!({ "repo": params.repo.to_string(), "archived": params.archived }),
                    &format!("Repository {}: {}", action, params.repo),
                );
                Ok(Outcome::Applied {
                    repo: params.repo,
                    change,
                    response,
                })
            }
        }
    }
}
