//! Configuration structures.

mod io;

pub use io::{CONFIG_ENV, config_dir, config_path};

use serde::{Deserialize, Serialize};

use crate::color::{ColorLevel, SpecialTerm};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: ColorConfig,
    /// Extra fallback entries, checked before the built-in table.
    #[serde(default)]
    pub special_terms: Vec<SpecialTerm>,
}

/// Whether to trust detection or override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Supports color iff a level was detected.
    #[default]
    Auto,
    Always,
    Never,
}

/// Color detection overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub mode: ColorMode,
    /// Pins the cached level instead of using the detected one.
    pub level: Option<ColorLevel>,
}

#[cfg(test)]
mod tests;
