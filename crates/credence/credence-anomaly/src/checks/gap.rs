//! Interior calendar weeks with no activity.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use credence_core::calendar;
use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, FlagKind, LedgerEntry};

/// Week starts (Mondays) between the first and last active week with no entries.
pub fn missing_weeks(entries: &[LedgerEntry]) -> Vec<NaiveDate> {
    let Some((first, last)) = calendar::date_span(entries) else {
        return Vec::new();
    };
    let active: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|e| calendar::week_start(e.event_date()))
        .collect();
    calendar::weeks_inclusive(first, last)
        .into_iter()
        .filter(|w| !active.contains(w))
        .collect()
}

pub fn check(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<AnomalyFlag> {
    let missing = missing_weeks(entries);
    let first = *missing.first()?;
    Some(AnomalyFlag::new(
        FlagKind::MissingPeriod,
        config.missing_period_severity,
        format!(
            "{} week(s) without any entries, starting the week of {first}",
            missing.len()
        ),
    ))
}
