//! Calendar bucketing shared by the anomaly detector, scorer, and insights.
//!
//! All bucketing is done on UTC calendar dates. Weeks start on Monday.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::LedgerEntry;

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Earliest and latest event dates, or `None` for an empty ledger.
pub fn date_span(entries: &[LedgerEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let first = entries.iter().map(|e| e.event_date()).min()?;
    let last = entries.iter().map(|e| e.event_date()).max()?;
    Some((first, last))
}

/// Whole calendar days between the first and last entry (0 for one day).
pub fn span_days(entries: &[LedgerEntry]) -> i64 {
    date_span(entries)
        .map(|(first, last)| (last - first).num_days())
        .unwrap_or(0)
}

/// Every date from `first` to `last`, inclusive.
pub fn days_inclusive(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    if last < first {
        return Vec::new();
    }
    first.iter_days().take_while(|d| *d <= last).collect()
}

/// Week starts (Mondays) covering `first..=last`, inclusive.
pub fn weeks_inclusive(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    if last < first {
        return Vec::new();
    }
    let end = week_start(last);
    week_start(first)
        .iter_weeks()
        .take_while(|w| *w <= end)
        .collect()
}

/// Revenue per calendar day over the dense span. Days without entries are 0.
pub fn daily_totals(entries: &[LedgerEntry]) -> Vec<(NaiveDate, f64)> {
    let Some((first, last)) = date_span(entries) else {
        return Vec::new();
    };
    dense_totals(entries, days_inclusive(first, last), |e| e.event_date())
}

/// Revenue per Monday-based week over the dense span. Weeks without entries are 0.
pub fn weekly_totals(entries: &[LedgerEntry]) -> Vec<(NaiveDate, f64)> {
    let Some((first, last)) = date_span(entries) else {
        return Vec::new();
    };
    dense_totals(entries, weeks_inclusive(first, last), |e| week_start(e.event_date()))
}

fn dense_totals(
    entries: &[LedgerEntry],
    buckets: Vec<NaiveDate>,
    bucket_of: impl Fn(&LedgerEntry) -> NaiveDate,
) -> Vec<(NaiveDate, f64)> {
    let mut sums: BTreeMap<NaiveDate, Decimal> =
        buckets.into_iter().map(|b| (b, Decimal::ZERO)).collect();
    for entry in entries {
        if let Some(sum) = sums.get_mut(&bucket_of(entry)) {
            *sum = sum.saturating_add(entry.amount);
        }
    }
    sums.into_iter()
        .map(|(bucket, sum)| (bucket, sum.to_f64().unwrap_or(0.0)))
        .collect()
}

/// The snapshot's as-of instant: the latest event time, or the Unix epoch
/// for an empty ledger. Used as `computed_at` so recomputation is reproducible.
pub fn as_of(entries: &[LedgerEntry]) -> DateTime<Utc> {
    entries
        .iter()
        .map(|e| e.event_time)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_is_monday() {
        // 2024-03-07 is a Thursday.
        assert_eq!(week_start(date(2024, 3, 7)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 4)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 4));
    }

    #[test]
    fn weeks_inclusive_counts_partial_weeks() {
        let weeks = weeks_inclusive(date(2024, 3, 10), date(2024, 3, 11));
        assert_eq!(weeks, vec![date(2024, 3, 4), date(2024, 3, 11)]);
    }

    #[test]
    fn totals_fill_empty_buckets_with_zero() {
        use crate::models::{Channel, EntryAttributes, EventType};
        use chrono::TimeZone;

        let at = |d: u32, cents: i64| LedgerEntry {
            id: format!("e{d}-{cents}"),
            business_id: "b".to_string(),
            event_time: Utc.with_ymd_and_hms(2024, 1, d, 9, 0, 0).unwrap(),
            amount: Decimal::new(cents, 2),
            currency: "MYR".to_string(),
            channel: Channel::Cash,
            event_type: EventType::Payment,
            source_evidence_id: "ev".to_string(),
            confidence: 1.0,
            attributes: EntryAttributes::default(),
        };
        let entries = vec![at(1, 1000), at(1, 550), at(3, 200), at(15, 100)];

        let daily = daily_totals(&entries);
        assert_eq!(daily.len(), 15);
        assert_eq!(daily[0], (date(2024, 1, 1), 15.5));
        assert_eq!(daily[1], (date(2024, 1, 2), 0.0));
        assert_eq!(daily[2], (date(2024, 1, 3), 2.0));

        let weekly = weekly_totals(&entries);
        assert_eq!(
            weekly,
            vec![
                (date(2024, 1, 1), 17.5),
                (date(2024, 1, 8), 0.0),
                (date(2024, 1, 15), 1.0),
            ]
        );
        assert!(weekly_totals(&[]).is_empty());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        use crate::models::{Channel, EntryAttributes, EventType};
        use chrono::TimeZone;

        let huge = |id: &str| LedgerEntry {
            id: id.to_string(),
            business_id: "b".to_string(),
            event_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            amount: Decimal::MAX / Decimal::TWO + Decimal::ONE,
            currency: "MYR".to_string(),
            channel: Channel::Cash,
            event_type: EventType::Payment,
            source_evidence_id: format!("ev-{id}"),
            confidence: 1.0,
            attributes: EntryAttributes::default(),
        };
        let daily = daily_totals(&[huge("a"), huge("b")]);
        assert_eq!(daily.len(), 1);
        assert!(daily[0].1.is_finite());
    }

    #[test]
    fn days_inclusive_single_day() {
        assert_eq!(days_inclusive(date(2024, 1, 1), date(2024, 1, 1)).len(), 1);
        assert!(days_inclusive(date(2024, 1, 2), date(2024, 1, 1)).is_empty());
    }
}
