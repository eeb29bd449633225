//! Environment inputs for color detection.
//!
//! Detection never reads `std::env` directly. It captures an [`EnvSnapshot`]
//! from an [`EnvSource`], so the same rules run against the live process
//! environment or against a fixed map in tests.

use std::collections::HashMap;

/// Where environment variables are read from.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values still count as "set".
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// A fixed in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`.
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }

    /// Removes `key`.
    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Returns true when `NO_COLOR` is present in `env`, whatever its value.
pub fn no_color_present(env: &dyn EnvSource) -> bool {
    env.var("NO_COLOR").is_some()
}

/// The environment signals one classification reads.
///
/// Unset variables are stored as empty strings, except `NO_COLOR` where
/// presence itself is the signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub term: String,
    pub terminal_emulator: String,
    pub colorterm: String,
    pub term_program: String,
    pub term_program_version: String,
    pub force_color: String,
    pub no_color: Option<String>,
    pub is_windows: bool,
}

impl EnvSnapshot {
    /// Captures a snapshot from `env` for the host OS family.
    pub fn capture(env: &dyn EnvSource) -> Self {
        Self::capture_for(env, cfg!(windows))
    }

    /// Captures a snapshot from `env`, overriding the OS family.
    pub fn capture_for(env: &dyn EnvSource, is_windows: bool) -> Self {
        let get = |key: &str| env.var(key).unwrap_or_default();
        Self {
            term: get("TERM"),
            terminal_emulator: get("TERMINAL_EMULATOR"),
            colorterm: get("COLORTERM"),
            term_program: get("TERM_PROGRAM"),
            term_program_version: get("TERM_PROGRAM_VERSION"),
            force_color: get("FORCE_COLOR"),
            no_color: env.var("NO_COLOR"),
            is_windows,
        }
    }

    /// Captures the live process environment.
    pub fn from_process() -> Self {
        Self::capture(&ProcessEnv)
    }

    /// Returns true when `NO_COLOR` was present.
    pub fn no_color(&self) -> bool {
        self.no_color.is_some()
    }
}
