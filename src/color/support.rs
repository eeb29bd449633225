//! Cached color support for one caller.
//!
//! [`ColorSupport`] runs detection once, caches the level together with the
//! `supports color` and `no color` flags, and lets tests force color on and
//! revert it. Construct one per test scope; the process-wide instance is
//! reached through [`crate::color::with_global`].

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::Mutex;

use super::detect::{DetectSource, Detection, Detector};
use super::env::{EnvSource, ProcessEnv, no_color_present};
use super::profile::ColorLevel;
use super::special::SpecialTerms;
use super::vtp;
use super::wsl::{KernelProbe, ProcVersion};
use crate::config::{ColorConfig, ColorMode, Config};
use crate::error::DetectError;

/// Cached color capability of a terminal.
#[derive(Debug)]
pub struct ColorSupport<E = ProcessEnv, P = ProcVersion> {
    env: E,
    detector: Detector<P>,
    overrides: ColorConfig,
    level: ColorLevel,
    needs_vtp: bool,
    source: DetectSource,
    supports_color: bool,
    no_color: bool,
    /// `supports_color` before the outermost `force_enable_color`.
    saved: Option<bool>,
    last_error: Mutex<Option<Arc<DetectError>>>,
}

impl ColorSupport {
    /// Detects from the live process environment.
    pub fn from_process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> ColorSupport<E> {
    /// Detects from `env` with the default detector.
    pub fn new(env: E) -> Self {
        Self::with_detector(env, Detector::new())
    }

    /// Detects from `env`, applying the user's config on top.
    pub fn with_config(env: E, config: &Config) -> Self {
        let detector = Detector::new().special_terms(SpecialTerms::with_extra(&config.special_terms));
        let mut support = Self::build(env, detector, config.color.clone());
        support.refresh();
        support
    }
}

impl<E: EnvSource, P: KernelProbe> ColorSupport<E, P> {
    /// Detects from `env` with a custom detector.
    pub fn with_detector(env: E, detector: Detector<P>) -> Self {
        let mut support = Self::build(env, detector, ColorConfig::default());
        support.refresh();
        support
    }

    fn build(env: E, detector: Detector<P>, overrides: ColorConfig) -> Self {
        Self {
            env,
            detector,
            overrides,
            level: ColorLevel::None,
            needs_vtp: false,
            source: DetectSource::Fallback,
            supports_color: false,
            no_color: false,
            saved: None,
            last_error: Mutex::new(None),
        }
    }

    fn detect(&self) -> Detection {
        let detection = self.detector.detect_env(&self.env);
        if let Some(err) = &detection.error {
            log::debug!("color: recording {err}");
        }
        detection
    }

    fn record(&self, error: Option<Arc<DetectError>>) {
        if let Some(err) = error {
            *self.last_error.lock() = Some(err);
        }
    }

    /// Re-runs detection and replaces the cached state.
    ///
    /// A pending `force_enable_color` is dropped.
    pub fn refresh(&mut self) {
        let detection = self.detect();
        self.level = self.overrides.level.unwrap_or(detection.level);
        self.needs_vtp = detection.needs_vtp;
        self.source = detection.source;
        self.supports_color = match self.overrides.mode {
            ColorMode::Auto => self.level.has_color(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        self.no_color = no_color_present(&self.env);
        self.saved = None;
        self.record(self.detector.probe().error());
        self.record(detection.error.map(Arc::new));
        log::debug!(
            "color: level={} source={} no_color={}",
            self.level,
            self.source,
            self.no_color
        );
    }

    /// Detects the level from the environment as it is now.
    ///
    /// The cached state is left alone; only the diagnostic error slot may be
    /// updated. Config overrides are not applied.
    pub fn detect_color_level(&self) -> ColorLevel {
        let detection = self.detect();
        self.record(detection.error.map(Arc::new));
        detection.level
    }

    /// Cached level.
    pub fn level(&self) -> ColorLevel {
        self.level
    }

    /// Which step of detection produced the cached level.
    pub fn source(&self) -> DetectSource {
        self.source
    }

    /// Windows only: the console needs virtual terminal processing enabled.
    pub fn needs_vtp(&self) -> bool {
        self.needs_vtp
    }

    /// Running under WSL, as reported by the detector's kernel probe.
    pub fn is_wsl(&self) -> bool {
        self.detector.probe().is_wsl()
    }

    pub fn is_support_color(&self) -> bool {
        self.supports_color
    }

    pub fn is_support_256_color(&self) -> bool {
        self.level.supports(ColorLevel::Extended)
    }

    pub fn is_support_true_color(&self) -> bool {
        self.level == ColorLevel::TrueColor
    }

    /// Returns true when `NO_COLOR` was present, whatever the detected level.
    pub fn no_color(&self) -> bool {
        self.no_color
    }

    /// Returns true when styled output should be emitted.
    pub fn should_colorize(&self) -> bool {
        !self.no_color && self.supports_color
    }

    /// Forces color on. Pair with [`Self::revert_color_support`].
    ///
    /// Nested calls keep the value saved by the first one.
    pub fn force_enable_color(&mut self) {
        self.no_color = false;
        if self.saved.is_none() {
            self.saved = Some(self.supports_color);
        }
        self.supports_color = true;
    }

    /// Undoes [`Self::force_enable_color`] and re-reads `NO_COLOR`.
    pub fn revert_color_support(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.supports_color = saved;
        }
        self.no_color = no_color_present(&self.env);
    }

    /// Forces color on until the returned guard is dropped.
    pub fn force_scoped(&mut self) -> ForcedColor<'_, E, P> {
        self.force_enable_color();
        ForcedColor { support: self }
    }

    /// Last recoverable detection error, kept for diagnostics only.
    pub fn last_error(&self) -> Option<Arc<DetectError>> {
        self.last_error.lock().clone()
    }

    pub fn clear_last_error(&self) {
        *self.last_error.lock() = None;
    }

    /// Enables virtual terminal processing when detection asked for it.
    ///
    /// Returns true when VTP is now on.
    pub fn enable_vtp_if_needed(&self) -> bool {
        self.needs_vtp && vtp::enable_virtual_terminal_processing()
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn detector(&self) -> &Detector<P> {
        &self.detector
    }
}

/// Guard returned by [`ColorSupport::force_scoped`]. Reverts on drop.
#[derive(Debug)]
pub struct ForcedColor<'a, E: EnvSource, P: KernelProbe> {
    support: &'a mut ColorSupport<E, P>,
}

impl<E: EnvSource, P: KernelProbe> Deref for ForcedColor<'_, E, P> {
    type Target = ColorSupport<E, P>;

    fn deref(&self) -> &Self::Target {
        self.support
    }
}

impl<E: EnvSource, P: KernelProbe> DerefMut for ForcedColor<'_, E, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.support
    }
}

impl<E: EnvSource, P: KernelProbe> Drop for ForcedColor<'_, E, P> {
    fn drop(&mut self) {
        self.support.revert_color_support();
    }
}
