use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "expense.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpendlogConfig {
    /// Path to the SQLite file
    pub database: Option<String>,
    /// Default profile
    pub user: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("spendlog.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<SpendlogConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SpendlogConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SpendlogConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Flag, then config, then the default file name
pub fn resolve_database(flag: Option<&Path>, config: Option<&SpendlogConfig>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

/// Flag, then config
pub fn resolve_user(flag: Option<&str>, config: Option<&SpendlogConfig>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| config.and_then(|c| c.user.clone()))
        .filter(|u| !u.trim().is_empty())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendlog.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendlog.toml");
        let config = SpendlogConfig {
            database: Some("data/expense.db".to_string()),
            user: Some("alice".to_string()),
        };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(matches!(write_config(&path, &config, false), Err(Error::Config(_))));
        write_config(&path, &SpendlogConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(SpendlogConfig::default()));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendlog.toml");
        std::fs::write(&path, "database = [").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolution_order() {
        let config = SpendlogConfig {
            database: Some("cfg.db".to_string()),
            user: Some("carol".to_string()),
        };

        assert_eq!(resolve_database(Some(Path::new("flag.db")), Some(&config)), PathBuf::from("flag.db"));
        assert_eq!(resolve_database(None, Some(&config)), PathBuf::from("cfg.db"));
        assert_eq!(resolve_database(None, None), PathBuf::from(DEFAULT_DATABASE));

        assert_eq!(resolve_user(Some("alice"), Some(&config)), Some("alice".to_string()));
        assert_eq!(resolve_user(None, Some(&config)), Some("carol".to_string()));
        assert_eq!(resolve_user(None, None), None);
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("expense.db");
        ensure_db_dir(&db).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
