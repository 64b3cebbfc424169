//! Configuration management for relcheck
//!
//! Settings come from an optional YAML file; every field has a default so the
//! tool runs without any file present. The Jira endpoint and project can also
//! be overridden on the command line.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "relcheck";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub jira: JiraConfig,
    pub patterns: PatternConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JiraConfig {
    /// Base URL of the Jira instance
    pub url: String,
    /// Project key, also used as the issue-key prefix in commit subjects
    pub project: String,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            url: "https://issues.apache.org/jira".to_string(),
            project: "AIRFLOW".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Text preceding the pull request number in commit bodies
    pub closes_marker: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            closes_marker: "Closes ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// The default config file path, `~/.config/relcheck/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| Error::Config("HOME environment variable not set".to_string()))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join(PKG_NAME)
            .join("config.yaml"))
    }
}
