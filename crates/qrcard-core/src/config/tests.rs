//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_match_faithful_encoding() {
    let settings = Settings::defaults().expect("defaults should deserialize");

    assert_eq!(settings.encoding.escaping, Escaping::Verbatim);
    assert_eq!(settings.encoding.line_ending, LineEnding::Lf);
    assert!(!settings.encoding.fold_lines);
}

#[test_log::test]
fn test_defaults_threshold_and_output() {
    let settings = Settings::defaults().expect("defaults should deserialize");

    assert_eq!(settings.qr.scan_threshold, DEFAULT_SCAN_THRESHOLD);
    assert_eq!(settings.output.directory, ".");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_encoding_config_from_strings() {
    let settings = Settings::builder()
        .and_then(|b| {
            Ok(b.set_override("encoding.escaping", "rfc")?
                .set_override("encoding.line_ending", "crlf")?
                .set_override("encoding.fold_lines", true)?)
        })
        .and_then(|b| Ok(b.build()?.try_deserialize::<Settings>()?))
        .expect("overrides should deserialize");

    assert_eq!(settings.encoding.escaping, Escaping::Rfc);
    assert_eq!(settings.encoding.line_ending, LineEnding::CrLf);
    assert!(settings.encoding.fold_lines);
}

#[test]
fn test_unknown_escaping_is_rejected() {
    let result = Settings::builder()
        .and_then(|b| Ok(b.set_override("encoding.escaping", "html")?))
        .and_then(|b| Ok(b.build()?.try_deserialize::<Settings>()?));

    assert!(result.is_err());
}

#[test]
fn test_settings_debug() {
    let settings = Settings::defaults().expect("defaults should deserialize");

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("encoding"));
    assert!(debug_str.contains("scan_threshold"));
}
