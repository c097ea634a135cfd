use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::repository::RepoId;

/// One intended or completed mutation, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub msg: String,
    pub additions: BTreeMap<String, Value>,
    pub modifications: BTreeMap<String, Value>,
    pub deletions: BTreeMap<String, Value>,
}

impl ChangeRecord {
    /// A record with a single modified attribute.
    pub fn modification(msg: impl Into<String>, attribute: &str, value: Value) -> Self {
        ChangeRecord {
            msg: msg.into(),
            modifications: BTreeMap::from([(attribute.to_string(), value)]),
            ..Default::default()
        }
    }
}

/// Describes a remote call without performing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: String,
    pub url: String,
    pub body: Value,
}

/// Severity of a preview artifact. Archive changes are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
}

/// What a preview run returns instead of mutating the remote repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewArtifact {
    /// Name of the component that produced the artifact.
    pub source: String,
    pub resource: RepoId,
    pub endpoint: EndpointDescriptor,
    pub change: ChangeRecord,
    pub level: Level,
}
