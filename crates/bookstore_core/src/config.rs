//! Runtime configuration for core bootstrap.
//!
//! # Responsibility
//! - Resolve logging level/directory from explicit values or environment.
//! - Normalize and validate values before they reach the logger backend.
//!
//! # Invariants
//! - A constructed `LogConfig` always has a supported level and an absolute dir.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "BOOKSTORE_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "BOOKSTORE_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "bookstore-logs";

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    /// - `level` is not one of `trace|debug|info|warn|warning|error`.
    /// - `log_dir` is empty or relative.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Resolves config from `BOOKSTORE_LOG_LEVEL` / `BOOKSTORE_LOG_DIR`,
    /// falling back to [`default_log_level`] and a temp-dir subdirectory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var(ENV_LOG_LEVEL).ok().as_deref(),
            std::env::var(ENV_LOG_DIR).ok().as_deref(),
        )
    }

    /// Resolves config from optional overrides with the same fallbacks as
    /// [`LogConfig::from_env`].
    pub fn resolve(level: Option<&str>, log_dir: Option<&str>) -> Result<Self, ConfigError> {
        let level = level.unwrap_or(default_log_level());
        match log_dir {
            Some(dir) => Self::new(level, dir),
            None => Ok(Self {
                level: normalize_level(level)?,
                log_dir: default_log_dir(),
            }),
        }
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
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

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
}

fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}
