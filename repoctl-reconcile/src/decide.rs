use repoctl_core::{
    change::ChangeRecord,
    repository::{RepoId, Repository},
    settings::DesiredState,
};
use serde_json::Value;

use crate::access::UpdateParams;

/// What to do about the `archived` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Archive,
    Unarchive,
}

impl Action {
    /// Value sent for `archived`, or `None` if nothing is to be sent.
    pub fn archived_value(self) -> Option<bool> {
        match self {
            Action::None => None,
            Action::Archive => Some(true),
            Action::Unarchive => Some(false),
        }
    }

    pub fn update_params(self, repo: &RepoId) -> Option<UpdateParams> {
        self.archived_value().map(|archived| UpdateParams {
            repo: repo.clone(),
            archived,
        })
    }

    pub fn change_record(self) -> Option<ChangeRecord> {
        let (msg, verb) = match self {
            Action::None => return None,
            Action::Archive => ("Archive repository", "archive"),
            Action::Unarchive => ("Unarchive repository", "unarchive"),
        };
        Some(ChangeRecord::modification(
            msg,
            "archived",
            Value::String(verb.to_string()),
        ))
    }
}

/// Pick the action that brings `observed` to `desired`.
///
/// `Unset` never yields a change, and neither does a repository that is
/// already in the desired state.
pub fn decide(observed: &Repository, desired: DesiredState) -> Action {
    match (desired, observed.archived) {
        (DesiredState::True, false) => Action::Archive,
        (DesiredState::False, true) => Action::Unarchive,
        _ => Action::None,
    }
}
