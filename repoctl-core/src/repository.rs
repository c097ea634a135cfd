use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a repository by its owner and name, as in `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) if is_valid_segment(owner) && is_valid_segment(name) => {
                Ok(RepoId::new(owner, name))
            }
            _ => bail!("Expected a repository of the form OWNER/NAME, got: {}", s),
        }
    }
}

/// Owner and repository names are limited to `[A-Za-z0-9._-]`, and the
/// relative path segments `.` and `..` are not names.
fn is_valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// A snapshot of a repository as observed on the remote side.
///
/// Only `archived` is governed here. The remaining attributes are carried
/// along untouched so that callers can still inspect the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub archived: bool,
    #[serde(flatten)]
    pub other_fields: serde_json::Map<String, Value>,
}

impl Repository {
    pub fn with_archived(archived: bool) -> Self {
        Repository {
            archived,
            other_fields: serde_json::Map::new(),
        }
    }
}
