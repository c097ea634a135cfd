use repoctl_core::repository::{RepoId, Repository};

use crate::access::{AccessError, RepositoryAccess};

/// Result of looking up a repository.
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    Present(Repository),
    Absent,
}

/// Fetch the current state of `repo`.
///
/// Only [`AccessError::NotFound`] is turned into [`Observed::Absent`]; every
/// other error is returned unchanged.
pub async fn fetch(access: &dyn RepositoryAccess, repo: &RepoId) -> Result<Observed, AccessError> {
    match access.get(repo).await {
        Ok(r) => Ok(Observed::Present(r)),
        Err(AccessError::NotFound { .. }) => Ok(Observed::Absent),
        Err(e) => Err(e),
    }
}
