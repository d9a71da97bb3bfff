use std::collections::BTreeSet;

use credence_core::calendar;
use credence_core::config::ScoringConfig;
use credence_core::constants::ACTIVITY_MAX;
use credence_core::models::LedgerEntry;

/// Activity component.
///
/// Formula: `min(30, active_weeks × 1.5 + avg_weekly_transactions × 2)`
/// where `avg_weekly_transactions = N / span_weeks` and `span_weeks` counts
/// calendar weeks from the first to the last entry, inclusive.
pub fn calculate(entries: &[LedgerEntry], config: &ScoringConfig) -> f64 {
    let Some((first, last)) = calendar::date_span(entries) else {
        return 0.0;
    };
    let span_weeks = calendar::weeks_inclusive(first, last).len();
    if span_weeks == 0 {
        return 0.0;
    }
    let active_weeks = entries
        .iter()
        .map(|e| calendar::week_start(e.event_date()))
        .collect::<BTreeSet<_>>()
        .len();
    let avg_weekly = entries.len() as f64 / span_weeks as f64;
    (active_weeks as f64 * config.activity_per_active_week
        + avg_weekly * config.activity_per_weekly_transaction)
        .min(ACTIVITY_MAX)
}
