//! Daily revenue spikes against a trailing baseline.
//!
//! Each day of the dense span is scored against the mean and population
//! stddev of the preceding `spike_window_days` days. The stddev is floored at
//! `spike_min_stddev_fraction × mean` so a perfectly steady baseline still
//! exposes a jump; a zero floored stddev gives a neutral z of 0.

use chrono::NaiveDate;
use credence_core::calendar;
use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, FlagKind, LedgerEntry};
use statrs::statistics::Statistics;

/// Highest z-score observed and the day it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakDeviation {
    pub date: NaiveDate,
    pub total: f64,
    pub baseline_mean: f64,
    pub z: f64,
}

/// Scan daily totals and return the day with the highest z-score, if any
/// day had enough history to be scored.
pub fn peak_deviation(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<PeakDeviation> {
    let totals = calendar::daily_totals(entries);
    let mut peak: Option<PeakDeviation> = None;

    for (i, &(date, total)) in totals.iter().enumerate() {
        let start = i.saturating_sub(config.spike_window_days);
        let history = &totals[start..i];
        if history.len() < config.spike_min_history_days {
            continue;
        }
        let values: Vec<f64> = history.iter().map(|(_, v)| *v).collect();
        let mean = values.iter().mean();
        let stddev = values
            .iter()
            .population_std_dev()
            .max(config.spike_min_stddev_fraction * mean);
        let z = if stddev.is_finite() && stddev > 0.0 {
            (total - mean) / stddev
        } else {
            0.0
        };
        if peak.map_or(true, |p| z > p.z) {
            peak = Some(PeakDeviation {
                date,
                total,
                baseline_mean: mean,
                z,
            });
        }
    }
    peak
}

pub fn check(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<AnomalyFlag> {
    let peak = peak_deviation(entries, config)?;
    if peak.z <= config.spike_z_threshold {
        return None;
    }
    let severity = (config.spike_severity_per_sigma * (peak.z - config.spike_z_threshold))
        .min(config.spike_severity_cap);
    Some(AnomalyFlag::new(
        FlagKind::SpikeDetected,
        severity,
        format!(
            "daily total {:.2} on {} is {:.1} standard deviations above the trailing mean of {:.2}",
            peak.total, peak.date, peak.z, peak.baseline_mean
        ),
    ))
}
