use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::server::ServerConfig;

pub mod dataset;
pub mod logging;
pub mod server;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub log_format: LogFormat,
}

/// An `IDICT_*` variable whose value could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEnv {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for IgnoredEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring invalid {}: {}", self.key, self.value)
    }
}

impl Config {
    /// Defaults overridden by `IDICT_*` environment variables.
    ///
    /// Logging is usually not installed yet, so ignored variables are
    /// returned for the caller to report.
    pub fn new() -> (Self, Vec<IgnoredEnv>) {
        let mut config = Self::default();
        let ignored = config.apply_env();
        (config, ignored)
    }

    /// Read a JSON config file, then apply environment overrides.
    /// Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<(Self, Vec<IgnoredEnv>), ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        let ignored = config.apply_env();
        Ok((config, ignored))
    }

    /// `load` when a config file is given, otherwise `new`
    pub fn resolve(path: Option<&Path>) -> Result<(Self, Vec<IgnoredEnv>), ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::new()),
        }
    }

    pub fn apply_env(&mut self) -> Vec<IgnoredEnv> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`, returning the values that could not
    /// be parsed
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<IgnoredEnv> {
        let mut ignored = Vec::new();

        if let Some(listen) = lookup("IDICT_LISTEN") {
            match listen.parse() {
                Ok(addr) => self.server.listen = addr,
                Err(_) => ignored.push(IgnoredEnv {
                    key: "IDICT_LISTEN",
                    value: listen,
                }),
            }
        }

        if let Some(path) = lookup("IDICT_DATASET_PATH") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Some(path) = lookup("IDICT_SOURCE_PATH") {
            self.dataset.source_path = PathBuf::from(path);
        }

        if let Some(format) = lookup("IDICT_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(format) => self.log_format = format,
                None => ignored.push(IgnoredEnv {
                    key: "IDICT_LOG_FORMAT",
                    value: format,
                }),
            }
        }

        ignored
    }
}
