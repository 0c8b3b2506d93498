//! Shell configuration loaded from an optional TOML file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for ingest and command output.
///
/// ```toml
/// precision = 2
/// bidirectional = true
/// warn_on_missing_edge = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Decimal places for weights and distances.
    pub precision: usize,
    /// Insert both directions for each ingested line.
    pub bidirectional: bool,
    /// Report `deleteedge` on a missing edge instead of ignoring it.
    pub warn_on_missing_edge: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            precision: 2,
            bidirectional: true,
            warn_on_missing_edge: true,
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
