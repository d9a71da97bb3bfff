//! Repeated uploads of the same record.
//!
//! Entries are grouped by (evidence source, amount) and ordered by time; an
//! entry counts as a duplicate when it lands within `duplicate_window_secs`
//! of the previous entry in its group.

use std::collections::BTreeMap;

use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, FlagKind, LedgerEntry};
use rust_decimal::Decimal;

/// Ids of entries judged to be duplicates of an earlier entry.
pub fn duplicate_ids(entries: &[LedgerEntry], window_secs: i64) -> Vec<&str> {
    let mut groups: BTreeMap<(&str, Decimal), Vec<&LedgerEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry((entry.source_evidence_id.as_str(), entry.amount.normalize()))
            .or_default()
            .push(entry);
    }

    let mut duplicates = Vec::new();
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.event_time.cmp(&b.event_time).then_with(|| a.id.cmp(&b.id)));
        for pair in group.windows(2) {
            if (pair[1].event_time - pair[0].event_time).num_seconds() <= window_secs {
                duplicates.push(pair[1].id.as_str());
            }
        }
    }
    duplicates.sort_unstable();
    duplicates
}

pub fn check(entries: &[LedgerEntry], config: &AnomalyConfig) -> Option<AnomalyFlag> {
    let duplicates = duplicate_ids(entries, config.duplicate_window_secs);
    if duplicates.is_empty() {
        return None;
    }
    let count = duplicates.len();
    let severity =
        (config.duplicate_severity_per_entry * count as f64).min(config.duplicate_severity_cap);
    Some(AnomalyFlag::new(
        FlagKind::DuplicateUpload,
        severity,
        format!(
            "{count} entries repeat the same source and amount within {} seconds",
            config.duplicate_window_secs
        ),
    ))
}
