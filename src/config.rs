//! Configuration: where the task database lives.
//!
//! Resolution order: `--database` CLI flag, then an optional YAML config
//! file, then the platform data directory default.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite task database.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
        .join("tasks.db")
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("taskdeck").join("config.yaml"))
}

impl Config {
    /// Load config from an explicit path, the default location, or built-in
    /// defaults, in that order. An explicit path that cannot be read is an
    /// error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path)?;
            return Ok(serde_yaml::from_str(&text)?);
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                let text = fs::read_to_string(&path)?;
                return Ok(serde_yaml::from_str(&text)?);
            }
        }

        Ok(Self::default())
    }

    /// Create the database's parent directory if needed.
    pub fn ensure_db_dir(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_db_path_from_yaml() {
        let config: Config = serde_yaml::from_str("db_path: /tmp/mytasks.db").unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/mytasks.db"));
    }

    #[test]
    fn empty_yaml_uses_default_path() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.db_path.ends_with("taskdeck/tasks.db"));
    }
}
