use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The level of color support detected for the terminal.
///
/// Variants are ordered from least to most capable, so `>=` answers
/// "supports at least".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColorLevel {
    /// No color support.
    #[default]
    None = 0,
    /// 16 ANSI colors (4-bit).
    Basic = 1,
    /// 256 colors (8-bit).
    Extended = 2,
    /// 24-bit true color.
    TrueColor = 3,
}

impl ColorLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [Self::None, Self::Basic, Self::Extended, Self::TrueColor];

    /// Short name: `"none"`, `"ansi"`, `"256"` or `"true"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "ansi",
            Self::Extended => "256",
            Self::TrueColor => "true",
        }
    }

    /// Numeric rank, 0 through 3.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a numeric rank. Ranks above 3 saturate to `TrueColor`.
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::None,
            1 => Self::Basic,
            2 => Self::Extended,
            _ => Self::TrueColor,
        }
    }

    /// Returns true when this level can render everything `other` can.
    pub fn supports(self, other: Self) -> bool {
        self >= other
    }

    /// Returns true for any level other than `None`.
    pub fn has_color(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for ColorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known color level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color level `{0}` (expected none, ansi, 256 or true)")]
pub struct ParseLevelError(pub String);

impl FromStr for ColorLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" | "off" => Ok(Self::None),
            "ansi" | "basic" | "16" => Ok(Self::Basic),
            "256" | "extended" | "ansi256" => Ok(Self::Extended),
            "true" | "truecolor" | "24bit" => Ok(Self::TrueColor),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl Serialize for ColorLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::ColorLevel;

    #[test]
    fn levels_are_totally_ordered() {
        assert!(ColorLevel::None < ColorLevel::Basic);
        assert!(ColorLevel::Basic < ColorLevel::Extended);
        assert!(ColorLevel::Extended < ColorLevel::TrueColor);
        for pair in ColorLevel::ALL.windows(2) {
            assert!(pair[0].rank() + 1 == pair[1].rank());
        }
    }

    #[test]
    fn names_match_short_form() {
        let names: Vec<_> = ColorLevel::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["none", "ansi", "256", "true"]);
    }

    #[test]
    fn parse_accepts_names_and_aliases() {
        for level in ColorLevel::ALL {
            assert_eq!(level.as_str().parse::<ColorLevel>(), Ok(level));
        }
        assert_eq!("TrueColor".parse::<ColorLevel>(), Ok(ColorLevel::TrueColor));
        assert_eq!("24bit".parse::<ColorLevel>(), Ok(ColorLevel::TrueColor));
        assert_eq!(" 16 ".parse::<ColorLevel>(), Ok(ColorLevel::Basic));
        assert!("rainbow".parse::<ColorLevel>().is_err());
    }

    #[test]
    fn from_rank_saturates() {
        assert_eq!(ColorLevel::from_rank(0), ColorLevel::None);
        assert_eq!(ColorLevel::from_rank(2), ColorLevel::Extended);
        assert_eq!(ColorLevel::from_rank(200), ColorLevel::TrueColor);
    }

    #[test]
    fn supports_follows_order() {
        for a in ColorLevel::ALL {
            for b in ColorLevel::ALL {
                assert_eq!(a.supports(b), a.rank() >= b.rank());
            }
        }
        assert!(!ColorLevel::None.has_color());
        assert!(ColorLevel::Basic.has_color());
    }
}
