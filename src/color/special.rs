//! Fallback table of known terminal identifiers.
//!
//! Consulted only when the environment rules yield no color. It maps `TERM`
//! values to a level and, on Windows, to whether the console must be switched
//! into virtual terminal processing before it interprets escape sequences.

use serde::{Deserialize, Serialize};

use super::profile::ColorLevel;

/// How an entry's `term` is compared against `TERM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermMatch {
    #[default]
    Exact,
    Prefix,
    Contains,
}

/// One known terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTerm {
    pub term: String,
    #[serde(default, rename = "match")]
    pub matching: TermMatch,
    pub level: ColorLevel,
    /// Only honored on Windows.
    #[serde(default)]
    pub needs_vtp: bool,
}

impl SpecialTerm {
    pub fn new(term: &str, matching: TermMatch, level: ColorLevel, needs_vtp: bool) -> Self {
        Self {
            term: term.to_owned(),
            matching,
            level,
            needs_vtp,
        }
    }

    /// Returns true when this entry describes `term`.
    pub fn matches(&self, term: &str) -> bool {
        match self.matching {
            TermMatch::Exact => term == self.term,
            TermMatch::Prefix => term.starts_with(&self.term),
            TermMatch::Contains => term.contains(&self.term),
        }
    }
}

/// Level and VTP requirement picked by the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallback {
    pub level: ColorLevel,
    pub needs_vtp: bool,
}

/// The fallback table. User entries are checked before the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTerms {
    entries: Vec<SpecialTerm>,
}

impl Default for SpecialTerms {
    fn default() -> Self {
        use ColorLevel::{Basic, Extended, TrueColor};
        use TermMatch::{Contains, Exact, Prefix};
        Self {
            entries: vec![
                SpecialTerm::new("256color", Contains, Extended, true),
                SpecialTerm::new("alacritty", Exact, TrueColor, false),
                SpecialTerm::new("xterm", Prefix, Extended, true),
                // mintty family: git-bash, msys2, cygwin
                SpecialTerm::new("cygwin", Exact, Basic, true),
                SpecialTerm::new("msys", Exact, Basic, true),
                // legacy consoles and ConEmu/cmder
                SpecialTerm::new("conemu", Exact, Basic, true),
                SpecialTerm::new("ansi", Exact, Basic, true),
            ],
        }
    }
}

impl SpecialTerms {
    /// Built-in table with `extra` entries taking precedence.
    pub fn with_extra(extra: &[SpecialTerm]) -> Self {
        let mut entries = extra.to_vec();
        entries.extend(Self::default().entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[SpecialTerm] {
        &self.entries
    }

    /// Picks a level from `TERM` alone.
    ///
    /// An empty `TERM` on Windows is a modern console: true color once VTP is
    /// enabled. An empty `TERM` elsewhere has no color. Unknown non-empty
    /// values get basic ANSI.
    pub fn lookup(&self, term: &str, is_windows: bool) -> Fallback {
        if term.is_empty() {
            return if is_windows {
                Fallback {
                    level: ColorLevel::TrueColor,
                    needs_vtp: true,
                }
            } else {
                Fallback::default()
            };
        }

        match self.entries.iter().find(|e| e.matches(term)) {
            Some(entry) => {
                log::debug!("color: special term {term:?} matched {:?}", entry.term);
                Fallback {
                    level: entry.level,
                    needs_vtp: entry.needs_vtp && is_windows,
                }
            }
            None => Fallback {
                level: ColorLevel::Basic,
                needs_vtp: false,
            },
        }
    }
}
