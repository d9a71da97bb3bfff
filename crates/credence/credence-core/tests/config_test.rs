//! Tests for the Credence configuration system.

use std::collections::HashMap;

use credence_core::config::credence_config::{
    ENV_LINK_WINDOW_HOURS, ENV_LOG_LEVEL, ENV_MIN_LINK_SIMILARITY, ENV_SPIKE_Z_THRESHOLD,
};
use credence_core::config::CredenceConfig;
use credence_core::errors::ConfigError;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn defaults_match_documented_thresholds() {
    let config = CredenceConfig::default();
    assert_eq!(config.linking.time_window_hours, 24.0);
    assert_eq!(config.linking.loose_time_window_hours, 48.0);
    assert_eq!(config.linking.min_similarity, 0.5);
    assert_eq!(config.anomaly.spike_z_threshold, 3.0);
    assert_eq!(config.anomaly.spike_window_days, 28);
    assert_eq!(config.anomaly.spike_min_history_days, 7);
    assert_eq!(config.anomaly.round_number_base, 50);
    assert_eq!(config.anomaly.duplicate_window_secs, 60);
    assert_eq!(config.scoring.high_min_score, 60);
    assert_eq!(config.scoring.medium_min_entries, 5);
    assert_eq!(config.insights.trend_window_days, 14);
    config.validate().unwrap();
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = CredenceConfig::from_toml(
        r#"
[linking]
time_window_hours = 12.0

[anomaly]
spike_z_threshold = 2.5
"#,
    )
    .unwrap();
    assert_eq!(config.linking.time_window_hours, 12.0);
    assert_eq!(config.linking.loose_time_window_hours, 48.0);
    assert_eq!(config.anomaly.spike_z_threshold, 2.5);
    assert_eq!(config.scoring, Default::default());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = CredenceConfig::from_toml("[linking\ntime_window_hours = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn out_of_range_fraction_fails_validation() {
    let err = CredenceConfig::from_toml("[linking]\nmin_similarity = 1.5\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "linking.min_similarity"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn weights_must_sum_to_one() {
    let err = CredenceConfig::from_toml("[linking]\namount_weight = 0.9\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn confidence_thresholds_must_be_ordered() {
    let err = CredenceConfig::from_toml("[scoring]\nmedium_min_score = 80\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn overrides_apply_over_file_values() {
    let mut config = CredenceConfig::from_toml("[linking]\ntime_window_hours = 12.0\n").unwrap();
    let vars: HashMap<&str, &str> = [
        (ENV_LINK_WINDOW_HOURS, "6"),
        (ENV_MIN_LINK_SIMILARITY, "0.6"),
        (ENV_SPIKE_Z_THRESHOLD, "4.0"),
        (ENV_LOG_LEVEL, "debug"),
    ]
    .into_iter()
    .collect();
    config
        .apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
        .unwrap();
    assert_eq!(config.linking.time_window_hours, 6.0);
    assert_eq!(config.linking.min_similarity, 0.6);
    assert_eq!(config.anomaly.spike_z_threshold, 4.0);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparseable_override_is_rejected() {
    let mut config = CredenceConfig::default();
    let err = config
        .apply_overrides_from(|key| (key == ENV_SPIKE_Z_THRESHOLD).then(|| "high".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn load_reads_file_and_missing_file_errors() {
    let dir = tempdir();
    let path = dir.path().join("credence.toml");
    std::fs::write(&path, "[insights]\ntrend_window_days = 7\n").unwrap();
    let config = CredenceConfig::load(&path).unwrap();
    assert_eq!(config.insights.trend_window_days, 7);

    let missing = dir.path().join("absent.toml");
    let err = CredenceConfig::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn toml_round_trip() {
    let config = CredenceConfig::default();
    let text = config.to_toml().unwrap();
    let parsed = CredenceConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}
