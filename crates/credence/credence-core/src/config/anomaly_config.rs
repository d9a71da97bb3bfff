use serde::{Deserialize, Serialize};

use super::defaults;

/// Anomaly detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Daily z-score above which a spike is flagged.
    pub spike_z_threshold: f64,
    /// Trailing window for the daily baseline (days).
    pub spike_window_days: usize,
    /// Days of history required before a day is evaluated.
    pub spike_min_history_days: usize,
    /// Baseline stddev floor as a fraction of the baseline mean.
    pub spike_min_stddev_fraction: f64,
    pub spike_severity_per_sigma: f64,
    pub spike_severity_cap: f64,

    /// Amounts that are exact multiples of this count as round.
    pub round_number_base: u32,
    /// Flag when the round share is strictly above this ratio.
    pub round_number_ratio: f64,
    pub round_number_min_entries: usize,
    pub round_number_severity: f64,

    /// Same-source, same-amount entries this close together are duplicates.
    pub duplicate_window_secs: i64,
    pub duplicate_severity_per_entry: f64,
    pub duplicate_severity_cap: f64,

    pub missing_period_severity: f64,

    pub uniform_min_entries: usize,
    /// Inter-arrival coefficient of variation below which spacing is suspicious.
    pub uniform_max_cv: f64,
    pub uniform_severity: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            spike_z_threshold: defaults::DEFAULT_SPIKE_Z_THRESHOLD,
            spike_window_days: defaults::DEFAULT_SPIKE_WINDOW_DAYS,
            spike_min_history_days: defaults::DEFAULT_SPIKE_MIN_HISTORY_DAYS,
            spike_min_stddev_fraction: defaults::DEFAULT_SPIKE_MIN_STDDEV_FRACTION,
            spike_severity_per_sigma: defaults::DEFAULT_SPIKE_SEVERITY_PER_SIGMA,
            spike_severity_cap: defaults::DEFAULT_SPIKE_SEVERITY_CAP,
            round_number_base: defaults::DEFAULT_ROUND_NUMBER_BASE,
            round_number_ratio: defaults::DEFAULT_ROUND_NUMBER_RATIO,
            round_number_min_entries: defaults::DEFAULT_ROUND_NUMBER_MIN_ENTRIES,
            round_number_severity: defaults::DEFAULT_ROUND_NUMBER_SEVERITY,
            duplicate_window_secs: defaults::DEFAULT_DUPLICATE_WINDOW_SECS,
            duplicate_severity_per_entry: defaults::DEFAULT_DUPLICATE_SEVERITY_PER_ENTRY,
            duplicate_severity_cap: defaults::DEFAULT_DUPLICATE_SEVERITY_CAP,
            missing_period_severity: defaults::DEFAULT_MISSING_PERIOD_SEVERITY,
            uniform_min_entries: defaults::DEFAULT_UNIFORM_MIN_ENTRIES,
            uniform_max_cv: defaults::DEFAULT_UNIFORM_MAX_CV,
            uniform_severity: defaults::DEFAULT_UNIFORM_SEVERITY,
        }
    }
}
