use log_spammer::{Config, LogFormat, Notice, DEFAULT_INTERVAL, DEFAULT_LOG_PATH};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn resolve(vars: &[(&str, &str)]) -> (Config, Vec<Notice>) {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::resolve(|key| vars.get(key).cloned())
}

#[test]
fn test_all_unset_uses_defaults() {
    let (config, notices) = resolve(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.interval, Duration::from_secs(2));
    assert_eq!(config.log_path, PathBuf::from("./spammer.log"));
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(
        notices,
        vec![
            Notice::IntervalUnset,
            Notice::LogPathUnset,
            Notice::LogFormatInvalid { value: String::new() },
        ]
    );
}

#[test]
fn test_empty_interval_is_unset() {
    let (config, notices) = resolve(&[("INTERVAL", "")]);
    assert_eq!(config.interval, DEFAULT_INTERVAL);
    assert!(notices.contains(&Notice::IntervalUnset));
}

#[test]
fn test_unparseable_interval_falls_back() {
    for bad in ["abc", "5", "ms", "-1s", "1s!", ".5s"] {
        let (config, notices) = resolve(&[("INTERVAL", bad)]);
        assert_eq!(config.interval, DEFAULT_INTERVAL, "INTERVAL={bad:?} should default");
        assert!(
            notices.contains(&Notice::IntervalInvalid { value: bad.to_string() }),
            "INTERVAL={bad:?} should record a notice"
        );
    }
}

#[test]
fn test_valid_interval_parses_exactly() {
    let cases = [
        ("500ms", Duration::from_millis(500)),
        ("2s", Duration::from_secs(2)),
        ("1m", Duration::from_secs(60)),
        ("1m30s", Duration::from_secs(90)),
        ("250us", Duration::from_micros(250)),
        ("0s", Duration::ZERO),
        ("2 seconds", Duration::from_secs(2)),
        ("1year", Duration::from_secs(31_557_600)),
    ];
    for (text, expected) in cases {
        let (config, notices) = resolve(&[("INTERVAL", text)]);
        assert_eq!(config.interval, expected, "INTERVAL={text:?}");
        assert!(
            !notices.iter().any(|n| matches!(
                n,
                Notice::IntervalUnset | Notice::IntervalInvalid { .. }
            )),
            "INTERVAL={text:?} should not record a notice"
        );
    }
}

#[test]
fn test_log_path_is_taken_verbatim() {
    let (config, notices) = resolve(&[("LOG_PATH", "/var/log/spam/out.log")]);
    assert_eq!(config.log_path, PathBuf::from("/var/log/spam/out.log"));
    assert!(!notices.contains(&Notice::LogPathUnset));
}

#[test]
fn test_empty_log_path_uses_default() {
    let (config, notices) = resolve(&[("LOG_PATH", "")]);
    assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
    assert!(notices.contains(&Notice::LogPathUnset));
}

#[test]
fn test_log_format_exact_match() {
    let (config, notices) = resolve(&[("LOG_FORMAT", "PLAIN")]);
    assert_eq!(config.log_format, LogFormat::Plain);
    assert!(notices.iter().all(|n| !matches!(n, Notice::LogFormatInvalid { .. })));

    let (config, _) = resolve(&[("LOG_FORMAT", "JSON")]);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_other_log_formats_fall_back_to_json() {
    for bad in ["json", "plain", "xml", "", "JSON "] {
        let (config, notices) = resolve(&[("LOG_FORMAT", bad)]);
        assert_eq!(config.log_format, LogFormat::Json, "LOG_FORMAT={bad:?}");
        assert!(notices.contains(&Notice::LogFormatInvalid { value: bad.to_string() }));
    }
}

#[test]
fn test_fully_specified_has_no_notices() {
    let (config, notices) = resolve(&[
        ("INTERVAL", "100ms"),
        ("LOG_PATH", "out/spam.log"),
        ("LOG_FORMAT", "PLAIN"),
    ]);
    assert!(notices.is_empty(), "unexpected notices: {notices:?}");
    assert_eq!(
        config,
        Config {
            interval: Duration::from_millis(100),
            log_path: PathBuf::from("out/spam.log"),
            log_format: LogFormat::Plain,
        }
    );
}
