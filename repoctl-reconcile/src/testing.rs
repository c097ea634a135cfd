//! Test doubles for the injected capabilities.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use repoctl_core::{
    change::EndpointDescriptor,
    repository::{RepoId, Repository},
};
use serde_json::Value;

use crate::{
    access::{AccessError, RepositoryAccess, UpdateParams},
    log::Logger,
};

#[derive(Default)]
struct FakeState {
    repo: Option<Repository>,
    get_error: Option<String>,
    update_error: Option<String>,
    update_calls: usize,
    last_update: Option<UpdateParams>,
}

/// An in-memory remote holding at most one repository.
pub(crate) struct FakeAccess {
    state: Mutex<FakeState>,
}

impl FakeAccess {
    pub(crate) fn with_archived(archived: bool) -> Self {
        Self::from_state(FakeState {
            repo: Some(Repository::with_archived(archived)),
            ..Default::default()
        })
    }

    pub(crate) fn missing() -> Self {
        Self::from_state(FakeState::default())
    }

    pub(crate) fn failing_get(message: &str) -> Self {
        Self::from_state(FakeState {
            get_error: Some(message.to_string()),
            ..Default::default()
        })
    }

    pub(crate) fn failing_update(self, message: &str) -> Self {
        self.state.lock().expect("mutex poisoned").update_error = Some(message.to_string());
        self
    }

    fn from_state(state: FakeState) -> Self {
        FakeAccess {
            state: Mutex::new(state),
        }
    }

    pub(crate) fn update_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").update_calls
    }

    pub(crate) fn last_update(&self) -> Option<UpdateParams> {
        self.state.lock().expect("mutex poisoned").last_update.clone()
    }

    pub(crate) fn archived(&self) -> Option<bool> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .repo
            .as_ref()
            .map(|r| r.archived)
    }
}

#[async_trait]
impl RepositoryAccess for FakeAccess {
    async fn get(&self, repo: &RepoId) -> Result<Repository, AccessError> {
        let state = self.state.lock().expect("mutex poisoned");
        if let Some(message) = &state.get_error {
            return Err(AccessError::Remote(anyhow!("{}", message)));
        }
        state.repo.clone().ok_or_else(|| AccessError::NotFound { repo: repo.clone() })
    }

    async fn update(&self, params: &UpdateParams) -> Result<Repository, AccessError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.update_calls += 1;
        state.last_update = Some(params.clone());
        if let Some(message) = &state.update_error {
            return Err(AccessError::Remote(anyhow!("{}", message)));
        }
        let repo = state.repo.as_mut().ok_or_else(|| AccessError::NotFound {
            repo: params.repo.clone(),
        })?;
        repo.archived = params.archived;
        Ok(repo.clone())
    }

    fn update_endpoint(&self, params: &UpdateParams) -> EndpointDescriptor {
        EndpointDescriptor {
            method: "PATCH".to_string(),
            url: format!("fake:///repos/{}", params.repo),
            body: params.body(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    Debug(Value, String),
    Warn(String),
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    records: Mutex<Vec<Record>>,
}

impl RecordingLogger {
    pub(crate) fn records(&self) -> Vec<Record> {
        self.records.lock().expect("mutex poisoned").clone()
    }

    pub(crate) fn debug_messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                Record::Debug(_, m) => Some(m),
                Record::Warn(_) => None,
            })
            .collect()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                Record::Warn(m) => Some(m),
                Record::Debug(..) => None,
            })
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, context: &Value, message: &str) {
        self.records
            .lock()
            .expect("mutex poisoned")
            .push(Record::Debug(context.clone(), message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.records
            .lock()
            .expect("mutex poisoned")
            .push(Record::Warn(message.to_string()));
    }
}
