//! Top-level Credence configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnomalyConfig, InsightsConfig, LinkingConfig, ObservabilityConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Environment variables recognised by [`CredenceConfig::apply_env_overrides`].
pub const ENV_LINK_WINDOW_HOURS: &str = "CREDENCE_LINK_WINDOW_HOURS";
pub const ENV_MIN_LINK_SIMILARITY: &str = "CREDENCE_MIN_LINK_SIMILARITY";
pub const ENV_SPIKE_Z_THRESHOLD: &str = "CREDENCE_SPIKE_Z_THRESHOLD";
pub const ENV_LOG_LEVEL: &str = "CREDENCE_LOG_LEVEL";

/// Top-level configuration aggregating all component sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CREDENCE_*`)
/// 2. Config file (`credence.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredenceConfig {
    pub linking: LinkingConfig,
    pub anomaly: AnomalyConfig,
    pub scoring: ScoringConfig,
    pub insights: InsightsConfig,
    pub observability: ObservabilityConfig,
}

impl CredenceConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: CredenceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CredenceConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CREDENCE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup(ENV_LINK_WINDOW_HOURS) {
            self.linking.time_window_hours = parse_env(ENV_LINK_WINDOW_HOURS, &v)?;
        }
        if let Some(v) = lookup(ENV_MIN_LINK_SIMILARITY) {
            self.linking.min_similarity = parse_env(ENV_MIN_LINK_SIMILARITY, &v)?;
        }
        if let Some(v) = lookup(ENV_SPIKE_Z_THRESHOLD) {
            self.anomaly.spike_z_threshold = parse_env(ENV_SPIKE_Z_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = v.trim().to_string();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.linking;
        require_positive("linking.time_window_hours", l.time_window_hours)?;
        require_positive("linking.loose_time_window_hours", l.loose_time_window_hours)?;
        if l.loose_time_window_hours < l.time_window_hours {
            return Err(invalid(
                "linking.loose_time_window_hours",
                "must be at least linking.time_window_hours",
            ));
        }
        require_fraction("linking.amount_tolerance_ratio", l.amount_tolerance_ratio)?;
        require_fraction("linking.loose_amount_tolerance_ratio", l.loose_amount_tolerance_ratio)?;
        if l.loose_amount_tolerance_ratio < l.amount_tolerance_ratio {
            return Err(invalid(
                "linking.loose_amount_tolerance_ratio",
                "must be at least linking.amount_tolerance_ratio",
            ));
        }
        require_positive("linking.amount_tolerance_floor", l.amount_tolerance_floor)?;
        require_fraction("linking.min_similarity", l.min_similarity)?;
        for (field, weight) in [
            ("linking.amount_weight", l.amount_weight),
            ("linking.time_weight", l.time_weight),
            ("linking.keyword_weight", l.keyword_weight),
        ] {
            require_fraction(field, weight)?;
        }
        let weight_sum = l.amount_weight + l.time_weight + l.keyword_weight;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(invalid("linking", "similarity weights must sum to 1.0"));
        }
        if l.min_token_len == 0 {
            return Err(invalid("linking.min_token_len", "must be greater than 0"));
        }

        let a = &self.anomaly;
        require_positive("anomaly.spike_z_threshold", a.spike_z_threshold)?;
        if a.spike_window_days == 0 {
            return Err(invalid("anomaly.spike_window_days", "must be greater than 0"));
        }
        if a.spike_min_history_days == 0 || a.spike_min_history_days > a.spike_window_days {
            return Err(invalid(
                "anomaly.spike_min_history_days",
                "must be between 1 and anomaly.spike_window_days",
            ));
        }
        require_fraction("anomaly.spike_min_stddev_fraction", a.spike_min_stddev_fraction)?;
        if a.round_number_base == 0 {
            return Err(invalid("anomaly.round_number_base", "must be greater than 0"));
        }
        require_fraction("anomaly.round_number_ratio", a.round_number_ratio)?;
        if a.duplicate_window_secs < 0 {
            return Err(invalid("anomaly.duplicate_window_secs", "must not be negative"));
        }
        for (field, severity) in [
            ("anomaly.spike_severity_per_sigma", a.spike_severity_per_sigma),
            ("anomaly.spike_severity_cap", a.spike_severity_cap),
            ("anomaly.round_number_severity", a.round_number_severity),
            ("anomaly.duplicate_severity_per_entry", a.duplicate_severity_per_entry),
            ("anomaly.duplicate_severity_cap", a.duplicate_severity_cap),
            ("anomaly.missing_period_severity", a.missing_period_severity),
            ("anomaly.uniform_severity", a.uniform_severity),
        ] {
            if !severity.is_finite() || severity < 0.0 {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }

        let s = &self.scoring;
        require_positive("scoring.longevity_days_per_point", s.longevity_days_per_point)?;
        if s.high_min_score > 100 || s.medium_min_score > s.high_min_score {
            return Err(invalid(
                "scoring.medium_min_score",
                "confidence thresholds must satisfy medium <= high <= 100",
            ));
        }
        if s.medium_min_entries > s.high_min_entries {
            return Err(invalid(
                "scoring.medium_min_entries",
                "must not exceed scoring.high_min_entries",
            ));
        }

        let i = &self.insights;
        if i.trend_window_days <= 0 {
            return Err(invalid("insights.trend_window_days", "must be greater than 0"));
        }
        require_fraction("insights.peak_runner_up_ratio", i.peak_runner_up_ratio)?;
        require_fraction("insights.recommendation_ratio", i.recommendation_ratio)?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("cannot parse {value:?}"),
    })
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be greater than 0"))
    }
}

fn require_fraction(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between 0.0 and 1.0"))
    }
}
