//! Terminal color-level detection.
//!
//! Detection reads a handful of environment variables in a fixed precedence:
//!
//! 1. `TERMINAL_EMULATOR=JetBrains-JediTerm` (unless `TERM=screen`): true color.
//! 2. The ordered rules in [`rules::ENV_RULES`] over `TERM`, `COLORTERM`,
//!    `FORCE_COLOR`, `TERM_PROGRAM` and `TERM_PROGRAM_VERSION`.
//! 3. When those give no color, the [`SpecialTerms`] table keyed on `TERM`,
//!    which also decides whether a Windows console needs VTP enabled.
//!
//! `NO_COLOR` never changes the level; it is reported separately. Neither does
//! WSL: [`is_wsl`] is a standalone report.

mod detect;
mod env;
mod global;
mod profile;
pub mod rules;
mod special;
mod support;
mod vtp;
pub mod wsl;

pub use detect::{DetectSource, Detection, Detector};
pub use env::{EnvSnapshot, EnvSource, MapEnv, ProcessEnv, no_color_present};
pub use global::{
    GlobalForcedColor, detect_color_level, force_color_scoped, force_enable_color,
    is_support_256_color, is_support_color, is_support_true_color, last_error, needs_vtp, no_color,
    reset_global, revert_color_support, should_colorize, term_color_level, with_global,
};
pub use profile::{ColorLevel, ParseLevelError};
pub use special::{Fallback, SpecialTerm, SpecialTerms, TermMatch};
pub use support::{ColorSupport, ForcedColor};
pub use vtp::enable_virtual_terminal_processing;
pub use wsl::{FixedProbe, KernelProbe, ProcVersion, is_wsl};
