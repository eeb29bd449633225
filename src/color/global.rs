//! Process-wide color support.
//!
//! One [`ColorSupport`] over the live environment, created on first use and
//! guarded by a mutex. Tests that force color on should prefer their own
//! instance; when they must use these functions they should run serially.
//!
//! ```no_run
//! termlevel::force_enable_color();
//! assert!(termlevel::is_support_color());
//! termlevel::revert_color_support();
//! ```

use std::sync::{Arc, LazyLock};

use parking_lot::{Mutex, MutexGuard};

use super::profile::ColorLevel;
use super::support::ColorSupport;
use crate::error::DetectError;

static GLOBAL: LazyLock<Mutex<ColorSupport>> =
    LazyLock::new(|| Mutex::new(ColorSupport::from_process()));

fn global() -> MutexGuard<'static, ColorSupport> {
    GLOBAL.lock()
}

/// Runs `f` with the process-wide instance locked.
///
/// The lock is not reentrant: calling any of this module's free functions
/// from inside `f` deadlocks. Use the `&mut ColorSupport` that is passed in.
pub fn with_global<R>(f: impl FnOnce(&mut ColorSupport) -> R) -> R {
    f(&mut global())
}

/// Rebuilds the process-wide instance from the current environment.
pub fn reset_global() {
    *GLOBAL.lock() = ColorSupport::from_process();
}

/// Detects the level from the live environment as it is now.
///
/// The cached state is left alone. A recoverable problem such as an
/// unparsable `TERM_PROGRAM_VERSION` lands in [`last_error`].
pub fn detect_color_level() -> ColorLevel {
    global().detect_color_level()
}

/// Cached level of the process-wide instance.
pub fn term_color_level() -> ColorLevel {
    global().level()
}

pub fn is_support_color() -> bool {
    global().is_support_color()
}

pub fn is_support_256_color() -> bool {
    global().is_support_256_color()
}

pub fn is_support_true_color() -> bool {
    global().is_support_true_color()
}

/// Returns true when `NO_COLOR` was present. Check this before emitting color.
pub fn no_color() -> bool {
    global().no_color()
}

pub fn should_colorize() -> bool {
    global().should_colorize()
}

pub fn needs_vtp() -> bool {
    global().needs_vtp()
}

/// Forces color on process-wide. Pair with [`revert_color_support`].
pub fn force_enable_color() {
    global().force_enable_color();
}

/// Restores the value saved by [`force_enable_color`] and re-reads `NO_COLOR`.
pub fn revert_color_support() {
    global().revert_color_support();
}

/// Forces color on process-wide until the guard is dropped.
pub fn force_color_scoped() -> GlobalForcedColor {
    force_enable_color();
    GlobalForcedColor { _private: () }
}

/// Guard returned by [`force_color_scoped`].
#[derive(Debug)]
#[must_use = "color is reverted as soon as the guard is dropped"]
pub struct GlobalForcedColor {
    _private: (),
}

impl Drop for GlobalForcedColor {
    fn drop(&mut self) {
        revert_color_support();
    }
}

/// Last recoverable detection error recorded by the process-wide instance.
pub fn last_error() -> Option<Arc<DetectError>> {
    global().last_error()
}
