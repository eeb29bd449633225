//! Error types.
//!
//! Detection errors are recoverable: they are recorded in a diagnostic slot
//! and never returned from the capability queries. Config errors are returned
//! from the fallible loaders.

use std::io;
use std::path::PathBuf;

/// A recoverable problem noticed while classifying the terminal.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// `TERM_PROGRAM_VERSION` did not start with a numeric major version.
    #[error("invalid TERM_PROGRAM_VERSION `{version}`")]
    InvalidTermProgramVersion { version: String },

    /// The kernel version file opened but could not be read.
    #[error("failed to read {path}: {source}")]
    ProbeRead {
        path: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Returns true when the config file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
