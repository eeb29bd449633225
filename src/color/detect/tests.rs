use super::{DetectSource, Detector};
use crate::color::{
    ColorLevel, EnvSnapshot, FixedProbe, KernelProbe, MapEnv, SpecialTerm, SpecialTerms, TermMatch,
};
use crate::error::DetectError;

fn detect_on(is_windows: bool, vars: &[(&str, &str)]) -> super::Detection {
    let env: MapEnv = vars.iter().copied().collect();
    Detector::with_probe(FixedProbe(false)).detect(&EnvSnapshot::capture_for(&env, is_windows))
}

fn level(vars: &[(&str, &str)]) -> ColorLevel {
    detect_on(false, vars).level
}

#[test]
fn screen_is_256_not_true_color() {
    let d = detect_on(false, &[("TERM", "screen")]);
    assert_eq!(d.level, ColorLevel::Extended);
    assert_eq!(d.source, DetectSource::Rule("screen"));
    assert!(!d.level.supports(ColorLevel::TrueColor));
}

#[test]
fn jetbrains_short_circuits() {
    let d = detect_on(
        false,
        &[
            ("TERM", ""),
            ("TERMINAL_EMULATOR", "JetBrains-JediTerm"),
            ("NO_COLOR", "1"),
            ("COLORTERM", "nope"),
        ],
    );
    assert_eq!(d.level, ColorLevel::TrueColor);
    assert_eq!(d.source, DetectSource::JetBrains);
    assert!(!d.needs_vtp);
}

#[test]
fn jetbrains_ignored_under_screen() {
    assert_eq!(
        level(&[("TERM", "screen"), ("TERMINAL_EMULATOR", "JetBrains-JediTerm")]),
        ColorLevel::Extended
    );
}

#[test]
fn colorterm_truecolor_ignores_term_program() {
    assert_eq!(
        level(&[("COLORTERM", "truecolor"), ("TERM_PROGRAM", "Apple_Terminal")]),
        ColorLevel::TrueColor
    );
    assert_eq!(
        level(&[("COLORTERM", "truecolor"), ("TERM_PROGRAM", "iTerm.app")]),
        ColorLevel::TrueColor
    );
}

#[test]
fn iterm_versions() {
    let iterm = |v: &str| level(&[("TERM_PROGRAM", "iTerm.app"), ("TERM_PROGRAM_VERSION", v)]);
    assert_eq!(iterm("3.4.1"), ColorLevel::TrueColor);
    assert_eq!(iterm("2.9"), ColorLevel::Extended);
    assert_eq!(iterm("abc"), ColorLevel::Extended);
}

#[test]
fn invalid_iterm_version_is_recorded_not_fatal() {
    let d = detect_on(
        false,
        &[("TERM_PROGRAM", "iTerm.app"), ("TERM_PROGRAM_VERSION", "abc")],
    );
    assert_eq!(d.level, ColorLevel::Extended);
    assert!(matches!(
        d.error,
        Some(DetectError::InvalidTermProgramVersion { .. })
    ));
}

#[test]
fn nothing_set_on_unix_is_none() {
    let d = detect_on(false, &[("TERM", "")]);
    assert_eq!(d.level, ColorLevel::None);
    assert_eq!(d.source, DetectSource::Fallback);
    assert!(!d.needs_vtp);
}

#[test]
fn plain_term_on_unix_is_basic() {
    assert_eq!(level(&[("TERM", "xterm-256color")]), ColorLevel::Basic);
}

#[test]
fn windows_console_without_term_needs_vtp() {
    let d = detect_on(true, &[]);
    assert_eq!(d.level, ColorLevel::TrueColor);
    assert!(d.needs_vtp);
}

#[test]
fn windows_mintty_falls_back_to_table() {
    let d = detect_on(true, &[("TERM", "xterm")]);
    assert_eq!(d.level, ColorLevel::Extended);
    assert!(d.needs_vtp);
    assert_eq!(d.source, DetectSource::Fallback);
}

#[test]
fn windows_env_rules_still_apply() {
    let d = detect_on(true, &[("COLORTERM", "24bit")]);
    assert_eq!(d.level, ColorLevel::TrueColor);
    assert!(!d.needs_vtp);
}

#[test]
fn wsl_kernel_does_not_change_rule_order() {
    let on_wsl = Detector::with_probe(FixedProbe(true)).windows(false);
    let detect = |vars: &[(&str, &str)]| {
        let env: MapEnv = vars.iter().copied().collect();
        on_wsl.detect_env(&env)
    };

    let apple = detect(&[
        ("WSL_DISTRO_NAME", "Ubuntu"),
        ("TERM", "xterm"),
        ("TERM_PROGRAM", "Apple_Terminal"),
    ]);
    assert_eq!(apple.level, ColorLevel::Extended);
    assert_eq!(apple.source, DetectSource::Rule("apple-terminal"));

    let bare = detect(&[("WSL_DISTRO_NAME", "Ubuntu"), ("TERM", "")]);
    assert_eq!(bare.level, ColorLevel::None);
    assert_eq!(bare.source, DetectSource::Fallback);

    let xterm = detect(&[("WSL_DISTRO_NAME", "Ubuntu"), ("TERM", "xterm-256color")]);
    assert_eq!(xterm.level, ColorLevel::Basic);
    assert!(on_wsl.probe().is_wsl());
}

#[test]
fn custom_special_terms() {
    let table = SpecialTerms::with_extra(&[SpecialTerm::new(
        "foot",
        TermMatch::Exact,
        ColorLevel::TrueColor,
        false,
    )]);
    let d = Detector::with_probe(FixedProbe(false))
        .special_terms(table)
        .detect(&EnvSnapshot::capture_for(&MapEnv::new().with("TERM", "foot"), true));
    assert_eq!(d.level, ColorLevel::TrueColor);
}

#[test]
fn derived_queries_are_monotonic() {
    for lo in ColorLevel::ALL {
        for hi in ColorLevel::ALL.into_iter().filter(|hi| *hi > lo) {
            if lo.supports(ColorLevel::Extended) {
                assert!(hi.supports(ColorLevel::Extended));
            }
            if lo.has_color() {
                assert!(hi.has_color());
            }
        }
    }
}

#[test]
fn source_display() {
    assert_eq!(DetectSource::Rule("iterm").to_string(), "rule:iterm");
    assert_eq!(DetectSource::JetBrains.to_string(), "jetbrains");
}
