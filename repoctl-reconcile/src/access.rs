use async_trait::async_trait;
use repoctl_core::{
    change::EndpointDescriptor,
    repository::{RepoId, Repository},
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failure of a remote repository operation.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The repository does not exist, or is not visible to us.
    #[error("repository not found: {repo}")]
    NotFound { repo: RepoId },

    /// Anything else: transport, authentication, unexpected status.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

/// Parameters of an `archived` update.
///
/// Both the apply and the preview path derive the remote call from this
/// value, so a preview shows exactly what would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateParams {
    pub repo: RepoId,
    pub archived: bool,
}

impl UpdateParams {
    /// The request body of the update.
    pub fn body(&self) -> Value {
        json!({ "archived": self.archived })
    }
}

/// Read and update access to remote repositories.
#[async_trait]
pub trait RepositoryAccess: Send + Sync {
    /// Fetch the repository. Must fail with [`AccessError::NotFound`] when it
    /// does not exist.
    async fn get(&self, repo: &RepoId) -> Result<Repository, AccessError>;

    /// Apply the update and return the repository as the remote reports it.
    async fn update(&self, params: &UpdateParams) -> Result<Repository, AccessError>;

    /// Describe the call that [`update`](Self::update) would make.
    fn update_endpoint(&self, params: &UpdateParams) -> EndpointDescriptor;
}
