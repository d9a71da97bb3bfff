//! Share of amounts that are exact multiples of a round base.

use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, FlagKind, LedgerEntry};
use rust_decimal::Decimal;

/// Fraction of positive amounts divisible by `base`, and the positive count.
pub fn round_share(entries: &[LedgerEntry], base: u32) -> (f64, usize) {
    let base = Decimal::from(base);
    let positive: Vec<&LedgerEntry> = entries
        .iter()
        .filter(|e| e.amount > Decimal::ZERO)
        .collect();
    if positive.is_empty() || base.is_zero() {
        return (0.0, positive.len());
    }
    let round = positive
        .iter()
        .filter(|e| (e.amount % base).is_zero())
        .count();
    (round as f64 / positive.len() as f64, positive.len())
}

pub fn check(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<AnomalyFlag> {
    if entries.len() < config.round_number_min_entries {
        return None;
    }
    let (share, positive) = round_share(entries, config.round_number_base);
    if share <= config.round_number_ratio {
        return None;
    }
    Some(AnomalyFlag::new(
        FlagKind::RoundNumberPattern,
        config.round_number_severity,
        format!(
            "{:.0}% of {} amounts are exact multiples of {}",
            share * 100.0,
            positive,
            config.round_number_base
        ),
    ))
}
