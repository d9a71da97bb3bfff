use credence_core::calendar;
use credence_core::config::ScoringConfig;
use credence_core::constants::LONGEVITY_MAX;
use credence_core::models::LedgerEntry;

/// Longevity component: `min(20, span_days / 9)`.
pub fn calculate(entries: &[LedgerEntry], config: &ScoringConfig) -> f64 {
    let days = calendar::span_days(entries) as f64;
    (days / config.longevity_days_per_point).min(LONGEVITY_MAX)
}
