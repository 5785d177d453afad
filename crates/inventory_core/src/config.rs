//! Runtime configuration for embedding applications and the CLI.
//!
//! # Invariants
//! - `from_env` never panics; invalid values surface as `ConfigError`.
//! - Unset variables fall back to defaults.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "INVENTORY_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "INVENTORY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "INVENTORY_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "inventory.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    EmptyPath(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::EmptyPath(variable) => write!(f, "`{variable}` cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Storage and logging settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Snapshot database file.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// Rolling log directory; `None` keeps file logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `INVENTORY_*` variables on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.db_path = non_empty_path(ENV_DB_PATH, &path)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.set_log_level(&level)?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            config.log_dir = Some(non_empty_path(ENV_LOG_DIR, &dir)?);
        }

        Ok(config)
    }

    /// Replaces the log level after normalizing it.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}

fn non_empty_path(variable: &'static str, value: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPath(variable));
    }
    Ok(PathBuf::from(trimmed))
}
