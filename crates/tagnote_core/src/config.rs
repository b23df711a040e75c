//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe where logs and notebook data live for one process.
//! - Normalize and validate user-provided logging options.
//!
//! # Invariants
//! - `db_path = None` selects in-memory storage.
//! - Log directories must be absolute.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_DIR_NAME: &str = "tagnote-logs";

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Level is not one of `trace|debug|info|warn|error`.
    InvalidLogLevel(String),
    /// Directory is empty or relative.
    InvalidLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidLogDir(message) => write!(f, "invalid log_dir: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Logging options consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Requested level, case-insensitive. `warning` is accepted as `warn`.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl LogConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Returns the canonical level name accepted by the logger backend.
    pub fn normalized_level(&self) -> Result<&'static str, ConfigError> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok("trace"),
            "debug" => Ok("debug"),
            "info" => Ok("info"),
            "warn" | "warning" => Ok("warn"),
            "error" => Ok("error"),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }

    /// Returns the log directory after emptiness and absoluteness checks.
    pub fn validated_dir(&self) -> Result<PathBuf, ConfigError> {
        let raw = self.log_dir.to_string_lossy();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidLogDir("log_dir cannot be empty".to_string()));
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(ConfigError::InvalidLogDir(format!(
                "log_dir must be an absolute path, got `{trimmed}`"
            )));
        }
        Ok(path.to_path_buf())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

/// Top-level configuration for opening a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log: LogConfig,
    /// SQLite file holding persisted snapshots. `None` keeps data in memory.
    pub db_path: Option<PathBuf>,
    /// Materialize the stock seed content when storage is empty.
    pub seed_on_first_run: bool,
}

impl CoreConfig {
    /// Config backed by a SQLite file at `db_path`.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(db_path.into()),
            ..Self::default()
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            db_path: None,
            seed_on_first_run: true,
        }
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, LogConfig};

    #[test]
    fn normalized_level_accepts_known_values() {
        let config = LogConfig::new(" WARNING ", "/tmp/logs");
        assert_eq!(config.normalized_level().unwrap(), "warn");

        let config = LogConfig::new("Info", "/tmp/logs");
        assert_eq!(config.normalized_level().unwrap(), "info");
    }

    #[test]
    fn normalized_level_rejects_unknown_values() {
        let config = LogConfig::new("verbose", "/tmp/logs");
        let err = config.normalized_level().unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("verbose".to_string()));
        assert!(err.to_string().contains("expected"));
    }

    #[test]
    fn validated_dir_rejects_relative_and_empty_paths() {
        let relative = LogConfig::new("info", "logs/dev");
        assert!(relative
            .validated_dir()
            .unwrap_err()
            .to_string()
            .contains("absolute"));

        let empty = LogConfig::new("info", "  ");
        assert!(matches!(
            empty.validated_dir(),
            Err(ConfigError::InvalidLogDir(_))
        ));
    }

    #[test]
    fn default_config_is_in_memory_with_seeding() {
        let config = CoreConfig::default();
        assert!(config.db_path.is_none());
        assert!(config.seed_on_first_run);
        assert!(config.log.validated_dir().is_ok());
    }
}
