//! Ordered environment rules.
//!
//! Each rule is a named predicate that either yields a level or passes.
//! [`ENV_RULES`] is evaluated top to bottom and the first match wins; when
//! nothing matches the level is [`ColorLevel::None`].

use super::env::EnvSnapshot;
use super::profile::ColorLevel;
use crate::error::DetectError;

/// `TERM` value of GNU screen: 256 colors, never true color.
pub const SCREEN_TERM: &str = "screen";

/// `TERMINAL_EMULATOR` set by JetBrains IDE terminals, which leave `TERM` unset.
pub const JETBRAINS_EMULATOR: &str = "JetBrains-JediTerm";

/// Outcome of a matching rule.
#[derive(Debug)]
pub struct Verdict {
    pub level: ColorLevel,
    /// Recoverable problem noticed while deciding.
    pub error: Option<DetectError>,
}

impl Verdict {
    const fn level(level: ColorLevel) -> Option<Self> {
        Some(Self { level, error: None })
    }

    /// `level` when `matched`, otherwise no verdict.
    fn when(matched: bool, level: ColorLevel) -> Option<Self> {
        if matched { Self::level(level) } else { None }
    }
}

/// A named predicate over the environment.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub eval: fn(&EnvSnapshot) -> Option<Verdict>,
}

impl Rule {
    /// Applies the rule to `snap`.
    pub fn apply(&self, snap: &EnvSnapshot) -> Option<Verdict> {
        (self.eval)(snap)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Environment rules in precedence order.
pub const ENV_RULES: [Rule; 7] = [
    Rule {
        name: "screen",
        eval: screen,
    },
    Rule {
        name: "colorterm-truecolor",
        eval: colorterm_truecolor,
    },
    Rule {
        name: "colorterm-or-force",
        eval: colorterm_or_force,
    },
    Rule {
        name: "apple-terminal",
        eval: apple_terminal,
    },
    Rule {
        name: "truecolor-program",
        eval: truecolor_program,
    },
    Rule {
        name: "iterm",
        eval: iterm,
    },
    Rule {
        name: "term-set",
        eval: term_set,
    },
];

fn screen(snap: &EnvSnapshot) -> Option<Verdict> {
    Verdict::when(snap.term == SCREEN_TERM, ColorLevel::Extended)
}

fn colorterm_truecolor(snap: &EnvSnapshot) -> Option<Verdict> {
    let ct = &snap.colorterm;
    Verdict::when(ct.contains("truecolor") || ct.contains("24bit"), ColorLevel::TrueColor)
}

fn colorterm_or_force(snap: &EnvSnapshot) -> Option<Verdict> {
    Verdict::when(
        !snap.colorterm.is_empty() || !snap.force_color.is_empty(),
        ColorLevel::Basic,
    )
}

fn apple_terminal(snap: &EnvSnapshot) -> Option<Verdict> {
    Verdict::when(snap.term_program == "Apple_Terminal", ColorLevel::Extended)
}

fn truecolor_program(snap: &EnvSnapshot) -> Option<Verdict> {
    Verdict::when(
        matches!(snap.term_program.as_str(), "Terminus" | "Hyper"),
        ColorLevel::TrueColor,
    )
}

fn iterm(snap: &EnvSnapshot) -> Option<Verdict> {
    if snap.term_program != "iTerm.app" {
        return None;
    }
    let version = &snap.term_program_version;
    if version.is_empty() {
        return Verdict::level(ColorLevel::Extended);
    }
    match iterm_major(version) {
        Some(3) => Verdict::level(ColorLevel::TrueColor),
        Some(_) => Verdict::level(ColorLevel::Extended),
        None => Some(Verdict {
            level: ColorLevel::Extended,
            error: Some(DetectError::InvalidTermProgramVersion {
                version: version.clone(),
            }),
        }),
    }
}

/// Parses the major version: everything before the first `.`.
pub fn iterm_major(version: &str) -> Option<i64> {
    version.split('.').next()?.parse().ok()
}

// A full implementation would read `max_colors` from terminfo here.
fn term_set(snap: &EnvSnapshot) -> Option<Verdict> {
    Verdict::when(!snap.is_windows && !snap.term.is_empty(), ColorLevel::Basic)
}

/// Result of walking [`ENV_RULES`].
#[derive(Debug)]
pub struct RuleMatch {
    /// Name of the matching rule, `None` when nothing matched.
    pub rule: Option<&'static str>,
    pub verdict: Verdict,
}

/// Evaluates [`ENV_RULES`] in order.
pub fn evaluate(snap: &EnvSnapshot) -> RuleMatch {
    for rule in &ENV_RULES {
        if let Some(verdict) = rule.apply(snap) {
            log::debug!("color: rule {} matched -> {}", rule.name, verdict.level);
            return RuleMatch {
                rule: Some(rule.name),
                verdict,
            };
        }
    }
    log::debug!("color: no environment rule matched");
    RuleMatch {
        rule: None,
        verdict: Verdict {
            level: ColorLevel::None,
            error: None,
        },
    }
}
