//! Configuration loaded from `<config_dir>/famfam-flags/config.json`.
//!
//! Every field is optional; a missing file yields the defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FlagError, Result};
use crate::flags::DEFAULT_BASE_PATH;

const APP_DIR: &str = "famfam-flags";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix every icon path is derived from.
    pub icon_base_path: String,
    /// Default tracing filter directive, e.g. "info" or "famfam_flags=debug".
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_base_path: DEFAULT_BASE_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = serde_json::from_str(&contents).map_err(|source| FlagError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

/// Directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("logs"))
}

/// Create the log directory and its parents.
pub fn prepare_log_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "icon_base_path": "/static/flags/" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.icon_base_path, "/static/flags/");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_prepare_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("famfam-flags").join("logs");
        prepare_log_dir(&logs).unwrap();
        assert!(logs.is_dir());

        // a file in the way makes the directory impossible to create
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = prepare_log_dir(&blocker.join("logs")).unwrap_err();
        assert!(matches!(err, FlagError::Io(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, FlagError::Config { .. }));
    }
}
