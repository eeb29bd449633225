//! Configuration file I/O: path resolution, loading, and saving.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TERMLEVEL_CONFIG";

const APP_DIR: &str = "termlevel";
const FILE_NAME: &str = "config.toml";

/// Returns the per-user configuration directory for `termlevel`.
///
/// `$XDG_CONFIG_HOME` or `~/.config` on Linux, `Library/Application Support`
/// on macOS, `%APPDATA%` on Windows. Falls back to `./termlevel` when the
/// platform has no such directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".").join(APP_DIR), |d| d.join(APP_DIR))
}

/// Returns the path to the config file: `$TERMLEVEL_CONFIG` when it is set
/// and non-empty, otherwise `config.toml` under [`config_dir`].
pub fn config_path() -> PathBuf {
    resolve_config_path(std::env::var_os(CONFIG_ENV), &config_dir())
}

fn resolve_config_path(explicit: Option<OsString>, dir: &Path) -> PathBuf {
    match explicit {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dir.join(FILE_NAME),
    }
}

impl Config {
    /// Loads config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                if !e.is_not_found() {
                    log::warn!("config: {e}");
                }
                Self::default()
            }
        }
    }

    /// Loads config from the default path, keeping the distinction between
    /// "file missing" and "parse error".
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Loads config from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let cfg = Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        log::info!("config: loaded from {}", path.display());
        Ok(cfg)
    }

    /// Parses config from a TOML string.
    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Pretty TOML rendering of this config.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes config to `path`, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_owned(),
                source,
            })?;
        }
        let data = self.to_toml()?;
        std::fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_owned(),
            source,
        })
    }
}
