//! Store configuration
//!
//! The database location comes from `DB_PATH`, read from the process
//! environment after loading a `.env` file if one is present.

use std::path::PathBuf;

use crate::errors::{config_error, Result};

/// Environment variable naming the SQLite database file
pub const DB_PATH_VAR: &str = "DB_PATH";

/// Database file used when `DB_PATH` is unset
pub const DEFAULT_DB_PATH: &str = "boxing.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolve configuration from `.env` and the process environment
    ///
    /// # Errors
    /// Returns `Configuration` if `DB_PATH` is set but blank.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(env_file = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup
    ///
    /// # Errors
    /// Returns `Configuration` if `DB_PATH` is present but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(DB_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                Err(config_error(DB_PATH_VAR, "DB_PATH is set but empty"))
            }
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(DEFAULT_DB_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxing_core::errors::ExErrorKind;

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_reads_db_path() {
        let config = StoreConfig::from_lookup(|key| {
            (key == DB_PATH_VAR).then(|| "/var/lib/boxing/boxing.db".to_string())
        })
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/boxing/boxing.db"));
    }

    #[test]
    fn test_blank_path_is_rejected() {
        let err = StoreConfig::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Configuration);
        assert_eq!(err.field(), Some(DB_PATH_VAR));
    }
}
