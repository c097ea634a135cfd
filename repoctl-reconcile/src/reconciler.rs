use std::sync::Arc;

use repoctl_core::{repository::RepoId, settings::Settings};
use serde_json::json;

use crate::{
    access::{AccessError, RepositoryAccess},
    decide::{decide, Action},
    execute::{Executor, Outcome},
    fetch::{fetch, Observed},
    log::Logger,
};

/// Brings a repository's `archived` flag in line with its settings.
///
/// The capabilities and the execution mode are fixed at construction. The
/// reconciler keeps no state between calls.
pub struct Reconciler {
    access: Arc<dyn RepositoryAccess>,
    logger: Arc<dyn Logger>,
    executor: Executor,
}

impl Reconciler {
    pub fn new(
        access: Arc<dyn RepositoryAccess>,
        logger: Arc<dyn Logger>,
        executor: Executor,
    ) -> Self {
        Reconciler {
            access,
            logger,
            executor,
        }
    }

    /// Run one reconciliation for `repo`.
    ///
    /// Returns no outcome when the repository does not exist or already
    /// matches `settings`, and exactly one otherwise.
    pub async fn reconcile(
        &self,
        repo: &RepoId,
        settings: &Settings,
    ) -> Result<Vec<Outcome>, AccessError> {
        let observed = match fetch(self.access.as_ref(), repo).await? {
            Observed::Present(r) => r,
            Observed::Absent => {
                self.logger.warn(&format!(
                    "Repository {} not found; skipping archive settings",
                    repo
                ));
                return Ok(Vec::new());
            }
        };

        let desired = settings.desired_archived();
        let action = decide(&observed, desired);

        let (params, change) = match (action.update_params(repo), action.change_record()) {
            (Some(params), Some(change)) => (params, change),
            _ => {
                self.logger.debug(
                    &json!({ "repo": repo.to_string(), "archived": observed.archived }),
                    "No archive change needed",
                );
                return Ok(Vec::new());
            }
        };
        debug_assert_ne!(action, Action::None);

        let outcome = self
            .executor
            .execute(self.access.as_ref(), self.logger.as_ref(), params, change)
            .await?;
        Ok(vec![outcome])
    }
}
