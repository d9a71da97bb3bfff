//! Machine-regular spacing between transactions.

use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, FlagKind, LedgerEntry};
use statrs::statistics::Statistics;

/// Coefficient of variation of the gaps between consecutive event times.
/// `None` with fewer than two entries or a zero mean gap.
pub fn interval_cv(entries: &[LedgerEntry]) -> Option<f64> {
    let mut times: Vec<i64> = entries.iter().map(|e| e.event_time.timestamp()).collect();
    times.sort_unstable();
    let gaps: Vec<f64> = times.windows(2).map(|w| (w[1] - w[0]) as f64).collect();
    if gaps.is_empty() {
        return None;
    }
    let mean = gaps.iter().mean();
    if !(mean.is_finite() && mean > 0.0) {
        return None;
    }
    Some(gaps.iter().population_std_dev() / mean)
}

pub fn check(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<AnomalyFlag> {
    if entries.len() < config.uniform_min_entries {
        return None;
    }
    let cv = interval_cv(entries)?;
    if cv >= config.uniform_max_cv {
        return None;
    }
    Some(AnomalyFlag::new(
        FlagKind::UniformIntervals,
        config.uniform_severity,
        format!(
            "{} entries are spaced at near-identical intervals (variation {:.3})",
            entries.len(),
            cv
        ),
    ))
}
