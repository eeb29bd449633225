//! WSL detection from the kernel version string.
//!
//! `/proc/version` on WSL names Microsoft as the kernel vendor:
//!
//! ```text
//! Linux version 4.4.0-19041-Microsoft (Microsoft@Microsoft.com) ...
//! Linux version 5.15.90.1-microsoft-standard-WSL2 ...
//! ```
//!
//! macOS has no such file and regular Linux kernels never mention Microsoft.

use std::fs::File;
use std::io::Read;
use std::sync::{Arc, OnceLock};

use crate::error::DetectError;

/// Path of the kernel version pseudo-file.
pub const PROC_VERSION: &str = "/proc/version";

/// Only the head of the file is inspected.
const PROBE_LEN: usize = 1024;

/// Answers "is this a WSL kernel?".
pub trait KernelProbe {
    fn is_wsl(&self) -> bool;

    /// Error hit while probing, if any. The answer is then `false`.
    fn error(&self) -> Option<Arc<DetectError>> {
        None
    }
}

/// Result of reading the kernel version file once.
#[derive(Debug, Default)]
pub struct ProbeResult {
    /// Raw (lossily decoded) head of the file, empty when it was unavailable.
    pub contents: String,
    pub is_wsl: bool,
    /// Set when the file opened but reading it failed.
    pub error: Option<Arc<DetectError>>,
}

impl ProbeResult {
    /// Classifies raw kernel version text.
    pub fn from_contents(contents: String) -> Self {
        let is_wsl = contents_mark_wsl(&contents);
        Self {
            contents,
            is_wsl,
            error: None,
        }
    }
}

/// Returns true when kernel version text carries the Microsoft vendor marker.
pub fn contents_mark_wsl(contents: &str) -> bool {
    contents.contains("Microsoft") || contents.contains("microsoft")
}

fn read_probe(path: &'static str) -> ProbeResult {
    let Ok(file) = File::open(path) else {
        log::debug!("wsl: {path} unavailable, assuming not WSL");
        return ProbeResult::default();
    };

    let mut buf = Vec::with_capacity(PROBE_LEN);
    match file.take(PROBE_LEN as u64).read_to_end(&mut buf) {
        Ok(_) => ProbeResult::from_contents(String::from_utf8_lossy(&buf).into_owned()),
        Err(source) => {
            log::warn!("wsl: failed to read {path}: {source}");
            ProbeResult {
                error: Some(Arc::new(DetectError::ProbeRead { path, source })),
                ..ProbeResult::default()
            }
        }
    }
}

static PROC_PROBE: OnceLock<ProbeResult> = OnceLock::new();

/// The process-wide probe of [`PROC_VERSION`].
///
/// The file is read on first use only; the result never changes afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcVersion;

impl ProcVersion {
    /// Runs the probe if it has not run yet, and returns the cached result.
    pub fn result(self) -> &'static ProbeResult {
        PROC_PROBE.get_or_init(|| read_probe(PROC_VERSION))
    }

    /// Raw kernel version contents, empty when the file was unavailable.
    pub fn contents(self) -> &'static str {
        &self.result().contents
    }
}

impl KernelProbe for ProcVersion {
    fn is_wsl(&self) -> bool {
        self.result().is_wsl
    }

    fn error(&self) -> Option<Arc<DetectError>> {
        self.result().error.clone()
    }
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl KernelProbe for FixedProbe {
    fn is_wsl(&self) -> bool {
        self.0
    }
}

/// Returns true when running under WSL, probing at most once per process.
pub fn is_wsl() -> bool {
    ProcVersion.is_wsl()
}
