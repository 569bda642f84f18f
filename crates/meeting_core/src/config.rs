//! Startup configuration.
//!
//! Loads store and logging settings from a TOML file (default
//! `config/config.toml`), then applies `MEETING_*` environment overrides.
//! Built once at startup and passed down explicitly.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Overrides `database.db_path`.
pub const ENV_DB_PATH: &str = "MEETING_DB_PATH";
/// Overrides `logging.log_file`.
pub const ENV_LOG_FILE: &str = "MEETING_LOG_FILE";
/// Overrides `logging.log_level`.
pub const ENV_LOG_LEVEL: &str = "MEETING_LOG_LEVEL";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Serialize(toml::ser::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

/// Effective application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the SQLite store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("database").join("meetings.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Log sink settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs").join("meeting_tracker.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Default config file location, relative to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("config").join("config.toml")
    }

    /// Loads `path` (defaults when absent) and applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let mut config = Self::from_file_or_default(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses `path` as TOML; a missing file yields defaults.
    ///
    /// # Errors
    /// Unreadable or malformed files are errors, not defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies overrides from `lookup`; blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(db_path) = non_blank(ENV_DB_PATH) {
            self.database.db_path = PathBuf::from(db_path);
        }
        if let Some(log_file) = non_blank(ENV_LOG_FILE) {
            self.logging.log_file = PathBuf::from(log_file);
        }
        if let Some(log_level) = non_blank(ENV_LOG_LEVEL) {
            self.logging.log_level = log_level;
        }
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}
