//! Terminal color-level detection.
//!
//! Classifies how many colors a terminal can render from its environment
//! (`TERM`, `COLORTERM`, `TERM_PROGRAM`, ...) into an ordered [`ColorLevel`],
//! and answers the usual capability questions for renderers deciding whether
//! to emit ANSI escape sequences.
//!
//! ```no_run
//! use termlevel::{ColorLevel, ColorSupport};
//!
//! let support = ColorSupport::from_process();
//! if !support.no_color() && support.level() >= ColorLevel::Extended {
//!     println!("\x1b[38;5;208morange\x1b[0m");
//! }
//! ```

pub mod color;
pub mod config;
pub mod error;

pub use color::{
    ColorLevel, ColorSupport, DetectSource, Detection, Detector, EnvSnapshot, EnvSource, MapEnv,
    ProcessEnv, detect_color_level, force_color_scoped, force_enable_color, is_support_256_color,
    is_support_color, is_support_true_color, no_color, reset_global, revert_color_support,
    should_colorize, term_color_level, with_global,
};
pub use config::Config;
pub use error::{ConfigError, DetectError};
