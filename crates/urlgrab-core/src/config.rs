//! Run configuration: output directory, URL list and transfer tuning.
//!
//! A TOML file where every top-level string entry is a URL, except the
//! reserved `output_path` key and the optional `[transfer]` table:
//!
//! ```toml
//! output_path = "/srv/mirror/"
//! logo = "https://www.example.org/assets/logo.png"
//! iso = "ftp://mirror.example.net/pub/debian.iso"
//!
//! [transfer]
//! connect_timeout_secs = 10
//! read_timeout_secs = 10
//! ```
//!
//! URLs keep the file's declared order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::downloader::TransferOptions;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "urlgrab.toml";
/// Reserved key naming the output directory.
pub const OUTPUT_PATH_KEY: &str = "output_path";
/// Reserved table holding [`TransferConfig`].
pub const TRANSFER_KEY: &str = "transfer";

/// Errors from locating or reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to locate configuration file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{key}` must be a string, found {found}")]
    InvalidEntry { key: String, found: &'static str },

    #[error("`{key}` must be greater than zero")]
    ZeroTimeout { key: &'static str },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Optional `[transfer]` section; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Seconds allowed to establish a connection.
    pub connect_timeout_secs: u64,
    /// Seconds a transfer may stall before it is aborted.
    pub read_timeout_secs: u64,
    pub follow_redirects: bool,
    pub max_redirections: u32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        let opts = TransferOptions::default();
        Self {
            connect_timeout_secs: opts.connect_timeout.as_secs(),
            read_timeout_secs: opts.read_timeout.as_secs(),
            follow_redirects: opts.follow_redirects,
            max_redirections: opts.max_redirections,
        }
    }
}

impl TransferConfig {
    /// Rejects zero timeouts, which curl reads as its built-in limit or no limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                key: "connect_timeout_secs",
            });
        }
        if self.read_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                key: "read_timeout_secs",
            });
        }
        Ok(())
    }

    pub fn to_options(&self) -> TransferOptions {
        TransferOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            follow_redirects: self.follow_redirects,
            max_redirections: self.max_redirections,
        }
    }
}

/// Loaded run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrabConfig {
    /// Directory receiving the downloaded files.
    pub output_dir: PathBuf,
    /// URLs in declared order.
    pub urls: Vec<String>,
    pub transfer: TransferConfig,
}

impl GrabConfig {
    /// Parses config text. An absent or empty `output_path` resolves to the
    /// current working directory.
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = data.parse()?;

        let mut output_dir = None;
        let mut transfer = TransferConfig::default();
        let mut urls = Vec::new();

        for (key, value) in table {
            match key.as_str() {
                OUTPUT_PATH_KEY => match value {
                    toml::Value::String(s) if !s.is_empty() => output_dir = Some(PathBuf::from(s)),
                    toml::Value::String(_) => {}
                    other => {
                        return Err(ConfigError::InvalidEntry {
                            key,
                            found: other.type_str(),
                        })
                    }
                },
                TRANSFER_KEY => {
                    transfer = value.try_into()?;
                    transfer.validate()?;
                }
                _ => match value {
                    toml::Value::String(url) => urls.push(url),
                    other => {
                        return Err(ConfigError::InvalidEntry {
                            key,
                            found: other.type_str(),
                        })
                    }
                },
            }
        }

        let output_dir = match output_dir {
            Some(dir) => dir,
            None => {
                let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
                tracing::info!(
                    "{} property is not provided; output destination defaults to {}",
                    OUTPUT_PATH_KEY,
                    cwd.display()
                );
                cwd
            }
        };

        Ok(Self {
            output_dir,
            urls,
            transfer,
        })
    }
}

/// Loads the config file at `path`.
pub fn load(path: &Path) -> Result<GrabConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    tracing::info!("read config file from {}", path.display());
    GrabConfig::from_toml_str(&data)
}
