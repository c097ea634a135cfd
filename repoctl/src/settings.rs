use std::path::Path;

use anyhow::{Context, Result};
use repoctl_core::settings::Settings;

/// Read a YAML settings document. An empty file expresses no settings.
pub(crate) fn load(path: &Path) -> Result<Settings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read settings file {}", path.display()))?;
    parse(&contents).with_context(|| format!("Could not parse settings file {}", path.display()))
}

fn parse(contents: &str) -> Result<Settings> {
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}
