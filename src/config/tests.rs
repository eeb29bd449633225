//! Configuration unit tests.

use super::*;
use crate::color::TermMatch;
use crate::error::ConfigError;

#[test]
fn default_config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize");
    let parsed = Config::parse(&toml_str).expect("deserialize");
    assert_eq!(parsed, cfg);
    assert_eq!(parsed.color.mode, ColorMode::Auto);
    assert!(parsed.color.level.is_none());
    assert!(parsed.special_terms.is_empty());
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed = Config::parse("").expect("deserialize");
    assert_eq!(parsed, Config::default());
}

#[test]
fn color_section_from_toml() {
    let toml_str = r#"
[color]
mode = "never"
level = "256"
"#;
    let parsed = Config::parse(toml_str).expect("deserialize");
    assert_eq!(parsed.color.mode, ColorMode::Never);
    assert_eq!(parsed.color.level, Some(ColorLevel::Extended));
}

#[test]
fn special_terms_from_toml() {
    let toml_str = r#"
[[special_terms]]
term = "foot"
level = "true"

[[special_terms]]
term = "rxvt"
match = "prefix"
level = "ansi"
needs_vtp = true
"#;
    let parsed = Config::parse(toml_str).expect("deserialize");
    assert_eq!(parsed.special_terms.len(), 2);
    let foot = &parsed.special_terms[0];
    assert_eq!(foot.term, "foot");
    assert_eq!(foot.matching, TermMatch::Exact);
    assert_eq!(foot.level, ColorLevel::TrueColor);
    assert!(!foot.needs_vtp);
    let rxvt = &parsed.special_terms[1];
    assert_eq!(rxvt.matching, TermMatch::Prefix);
    assert!(rxvt.matches("rxvt-unicode"));
    assert!(rxvt.needs_vtp);
}

#[test]
fn unknown_level_is_a_parse_error() {
    let err = Config::parse("[color]\nlevel = \"rainbow\"\n").expect_err("bad level");
    assert!(err.to_string().contains("rainbow"));
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");
    let cfg = Config {
        color: ColorConfig {
            mode: ColorMode::Always,
            level: Some(ColorLevel::Basic),
        },
        special_terms: Vec::new(),
    };
    cfg.save_to(&path).expect("save");
    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load_from(&dir.path().join("absent.toml")).expect_err("missing");
    assert!(err.is_not_found());
}

#[test]
fn invalid_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[color\nmode = ").expect("write");
    let err = Config::load_from(&path).expect_err("invalid");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn config_path_honors_override() {
    let path = config_path();
    match std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        Some(explicit) => assert_eq!(path, std::path::PathBuf::from(explicit)),
        None => assert!(path.ends_with("termlevel/config.toml")),
    }
}
