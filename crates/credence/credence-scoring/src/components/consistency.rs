use credence_core::calendar;
use credence_core::config::ScoringConfig;
use credence_core::constants::CONSISTENCY_MAX;
use credence_core::models::LedgerEntry;
use statrs::statistics::Statistics;

/// Consistency component.
///
/// Formula: `20 × max(0, 1 − cv)` where `cv` is the population coefficient of
/// variation of weekly revenue over the span (empty weeks count as zero).
/// A span shorter than `consistency_min_weeks` or a zero mean scores 0.
pub fn calculate(entries: &[LedgerEntry], config: &ScoringConfig) -> f64 {
    let weekly: Vec<f64> = calendar::weekly_totals(entries)
        .into_iter()
        .map(|(_, total)| total)
        .collect();
    if weekly.is_empty() || weekly.len() < config.consistency_min_weeks {
        return 0.0;
    }
    let mean = weekly.iter().mean();
    if !(mean.is_finite() && mean > 0.0) {
        return 0.0;
    }
    let cv = weekly.iter().population_std_dev() / mean;
    if !cv.is_finite() {
        return 0.0;
    }
    CONSISTENCY_MAX * (1.0 - cv).clamp(0.0, 1.0)
}
