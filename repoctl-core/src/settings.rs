//! Desired repository settings, as written in a settings document.
//!
//! The `archived` key is deliberately kept loosely typed. Settings files are
//! written by hand, and a quoted `"true"` is as common as a bare `true`.
//! [`DesiredState::normalize`] decides what such a value means.

use serde::Deserialize;
use serde_json::Value;

/// The settings document, reduced to what `repoctl` interprets.
///
/// Every other key is skipped, whatever its shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub archived: Option<RawFlag>,
}

impl Settings {
    pub fn desired_archived(&self) -> DesiredState {
        DesiredState::normalize(self.archived.as_ref())
    }
}

/// A flag value exactly as it appeared in the settings document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
    Other(Value),
}

/// Tri-state desired value: no policy, or an explicit `true` / `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredState {
    Unset,
    True,
    False,
}

impl DesiredState {
    /// Absent → `Unset`, booleans pass through, the exact string `"true"` is
    /// `True`, and anything else is `False`.
    ///
    /// Note that `"TRUE"`, `"yes"` and `"1"` are all `False`.
    pub fn normalize(raw: Option<&RawFlag>) -> DesiredState {
        match raw {
            None => DesiredState::Unset,
            Some(RawFlag::Bool(true)) => DesiredState::True,
            Some(RawFlag::Bool(false)) => DesiredState::False,
            Some(RawFlag::Text(s)) if s == "true" => DesiredState::True,
            Some(_) => DesiredState::False,
        }
    }
}
