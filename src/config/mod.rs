//! Configuration management for `call_center`.
//!
//! Database path sources and precedence (highest wins):
//! 1. CLI `--db`
//! 2. `CALL_CENTER_DB` environment variable
//! 3. Project config (`./call_center.yaml`)
//! 4. User config (`~/.config/call_center/config.yaml`)
//! 5. Default (`call_center.db` in the working directory)

use crate::error::{CallCenterError, Result};
use crate::service::IssueService;
use crate::storage::SqliteStorage;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default database filename, matching existing deployments.
pub const DEFAULT_DB_FILENAME: &str = "call_center.db";

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "CALL_CENTER_DB";

/// Project config filename looked up in the working directory.
const PROJECT_CONFIG_FILENAME: &str = "call_center.yaml";

/// Values taken from global CLI flags, layered over file/env config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub json: Option<bool>,
    pub lock_timeout: Option<u64>,
}

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Database path, relative paths resolved against the working directory.
    #[serde(default)]
    pub db: Option<PathBuf>,
}

/// Load the first config file found, or defaults when none exists.
///
/// # Errors
///
/// Returns a `Config` error when a file exists but cannot be read or parsed;
/// a missing file is not an error.
pub fn load_file_config() -> Result<FileConfig> {
    let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILENAME)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(
            Path::new(&home)
                .join(".config")
                .join("call_center")
                .join("config.yaml"),
        );
    }

    for path in candidates {
        if path.is_file() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| CallCenterError::Config(format!("{}: {e}", path.display())))?;
            let config: FileConfig = serde_yaml::from_str(&raw)
                .map_err(|e| CallCenterError::Config(format!("{}: {e}", path.display())))?;
            return Ok(config);
        }
    }

    Ok(FileConfig::default())
}

/// Resolve the database path from all configuration layers.
///
/// # Errors
///
/// Returns a `Config` error if a config file exists but is unreadable.
pub fn resolve_db_path(cli: &CliOverrides) -> Result<PathBuf> {
    if let Some(path) = &cli.db {
        return Ok(path.clone());
    }
    if let Some(path) = env::var_os(DB_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = load_file_config()?.db {
        return Ok(path);
    }
    Ok(PathBuf::from(DEFAULT_DB_FILENAME))
}

/// Open storage at the resolved database path.
///
/// The file is created on first use (`cct init` simply opens it eagerly);
/// for every other command a missing file is reported instead of silently
/// creating an empty database next to the real one.
///
/// # Errors
///
/// Returns `DatabaseNotFound` when the resolved path does not exist and
/// `must_exist` is set, or any open/schema error from the storage layer.
pub fn open_storage(cli: &CliOverrides, must_exist: bool) -> Result<SqliteStorage> {
    let path = resolve_db_path(cli)?;
    if must_exist && !path.exists() {
        return Err(CallCenterError::DatabaseNotFound { path });
    }
    SqliteStorage::open_with_timeout(&path, cli.lock_timeout)
}

/// Open storage and wrap it in the issue service.
///
/// # Errors
///
/// Same failure modes as [`open_storage`].
pub fn open_service(cli: &CliOverrides) -> Result<IssueService> {
    Ok(IssueService::new(open_storage(cli, true)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_db_wins() {
        let cli = CliOverrides {
            db: Some(PathBuf::from("/tmp/override.db")),
            ..Default::default()
        };
        let path = resolve_db_path(&cli).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/override.db"));
    }

    #[test]
    fn test_file_config_parses() {
        let config: FileConfig = serde_yaml::from_str("db: /srv/data/issues.db\n").unwrap();
        assert_eq!(config.db, Some(PathBuf::from("/srv/data/issues.db")));
    }

    #[test]
    fn test_empty_file_config_is_default() {
        let config: FileConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.db.is_none());
    }
}
