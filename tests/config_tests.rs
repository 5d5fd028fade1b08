use annotator::kernel::capability::InteractionMode;
use annotator::{AnnotatorError, PlayerConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = PlayerConfig::default();
    assert!(!config.show_native_controls);
    assert_eq!(config.min_pause_interval_seconds, 2.0);
    assert_eq!(config.error_grace_period(), Duration::from_secs(3));
    assert_eq!(config.too_early_resume_delay(), Duration::from_millis(1500));
    assert_eq!(config.interaction_mode(), InteractionMode::ClickToPause);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = PlayerConfig::from_json_str(
        r#"{ "show_native_controls": true, "text": { "too_early": "Slow down." } }"#,
    )
    .unwrap();

    assert_eq!(config.interaction_mode(), InteractionMode::NativeControls);
    assert_eq!(config.min_pause_interval_seconds, 2.0);
    assert_eq!(config.text.too_early, "Slow down.");
    assert_eq!(config.text.pause_hint, PlayerConfig::default().text.pause_hint);
}

#[test]
fn test_negative_interval_rejected() {
    let err = PlayerConfig::from_json_str(r#"{ "error_grace_period_seconds": -1.0 }"#).unwrap_err();
    match err {
        AnnotatorError::InvalidInterval { field, value } => {
            assert_eq!(field, "error_grace_period_seconds");
            assert_eq!(value, -1.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        PlayerConfig::from_json_str("{ not json"),
        Err(AnnotatorError::ConfigParse(_))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let err = PlayerConfig::from_json_path("/nonexistent/annotator.json").unwrap_err();
    assert!(matches!(err, AnnotatorError::ConfigRead { .. }));
    assert!(err.to_string().contains("/nonexistent/annotator.json"));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("annotator-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"{ "min_pause_interval_seconds": 4.5 }"#).unwrap();
    drop(file);

    let config = PlayerConfig::from_json_path(&path).unwrap();
    assert_eq!(config.min_pause_interval_seconds, 4.5);
    let _ = std::fs::remove_file(&path);
}
