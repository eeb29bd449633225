use std::fmt;

use super::env::{EnvSnapshot, EnvSource};
use super::profile::ColorLevel;
use super::rules::{self, JETBRAINS_EMULATOR, SCREEN_TERM};
use super::special::SpecialTerms;
use super::wsl::{KernelProbe, ProcVersion};
use crate::error::DetectError;

/// Which step of detection decided the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectSource {
    /// `TERMINAL_EMULATOR=JetBrains-JediTerm`.
    JetBrains,
    /// A named environment rule.
    Rule(&'static str),
    /// The special-terminal table.
    Fallback,
}

impl fmt::Display for DetectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JetBrains => f.write_str("jetbrains"),
            Self::Rule(name) => write!(f, "rule:{name}"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Result of one classification.
#[derive(Debug)]
pub struct Detection {
    pub level: ColorLevel,
    /// Windows only: the console must enable virtual terminal processing.
    pub needs_vtp: bool,
    pub source: DetectSource,
    /// Recoverable problem noticed on the way. Does not change `level`.
    pub error: Option<DetectError>,
}

impl Detection {
    fn decided(level: ColorLevel, source: DetectSource) -> Self {
        Self {
            level,
            needs_vtp: false,
            source,
            error: None,
        }
    }
}

/// Classifies an [`EnvSnapshot`] into a [`ColorLevel`].
///
/// The kernel `probe` is carried for callers that report WSL; it never takes
/// part in classification.
#[derive(Debug, Clone)]
pub struct Detector<P = ProcVersion> {
    probe: P,
    special: SpecialTerms,
    is_windows: bool,
}

impl Default for Detector {
    fn default() -> Self {
        Self::with_probe(ProcVersion)
    }
}

impl Detector {
    /// Detector using the process-wide `/proc/version` probe.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: KernelProbe> Detector<P> {
    /// Detector with a custom kernel probe.
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            special: SpecialTerms::default(),
            is_windows: cfg!(windows),
        }
    }

    /// Overrides the host OS family used when capturing environments.
    #[must_use]
    pub fn windows(mut self, is_windows: bool) -> Self {
        self.is_windows = is_windows;
        self
    }

    pub fn is_windows(&self) -> bool {
        self.is_windows
    }

    /// Replaces the special-terminal fallback table.
    #[must_use]
    pub fn special_terms(mut self, special: SpecialTerms) -> Self {
        self.special = special;
        self
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Captures `env` for this detector's OS family and runs detection.
    pub fn detect_env(&self, env: &dyn EnvSource) -> Detection {
        self.detect(&EnvSnapshot::capture_for(env, self.is_windows))
    }

    /// Runs detection over `snap`. Never fails; problems are attached to the
    /// returned [`Detection`].
    pub fn detect(&self, snap: &EnvSnapshot) -> Detection {
        // screen never gets true color, whatever the emulator claims.
        if snap.term != SCREEN_TERM && snap.terminal_emulator == JETBRAINS_EMULATOR {
            log::debug!("color: true color on JetBrains-JediTerm, windows={}", snap.is_windows);
            return Detection::decided(ColorLevel::TrueColor, DetectSource::JetBrains);
        }

        let matched = rules::evaluate(snap);
        if let Some(err) = &matched.verdict.error {
            log::warn!("color: {err}");
        }
        if let Some(rule) = matched.rule {
            if matched.verdict.level != ColorLevel::None {
                return Detection {
                    level: matched.verdict.level,
                    needs_vtp: false,
                    source: DetectSource::Rule(rule),
                    error: matched.verdict.error,
                };
            }
        }

        log::debug!("color: level none, falling back to TERM={:?}", snap.term);
        let fallback = self.special.lookup(&snap.term, snap.is_windows);
        Detection {
            level: fallback.level,
            needs_vtp: fallback.needs_vtp,
            source: DetectSource::Fallback,
            error: matched.verdict.error,
        }
    }
}

#[cfg(test)]
mod tests;
