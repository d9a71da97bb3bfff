//! Ingestion boundary: raw extractor records in, validated ledger entries out.
//!
//! Nothing here aborts. Each rejected record becomes an [`IngestError`]
//! warning and the rest of the ledger is still scored.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use credence_core::constants::DEFAULT_CURRENCY;
use credence_core::errors::{IngestError, IngestReport};
use credence_core::models::{Channel, EntryAttributes, EventType, LedgerEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A ledger record as produced by the extraction stage, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLedgerEntry {
    pub id: String,
    pub business_id: String,
    /// RFC 3339, or a naive timestamp / date taken as UTC.
    pub event_time: String,
    /// JSON number or decimal string.
    pub amount: Value,
    #[serde(default)]
    pub currency: Option<String>,
    pub channel: String,
    pub event_type: String,
    pub source_evidence_id: String,
    pub confidence: f64,
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
}

/// Convert raw records, then sanitize the result.
pub fn ingest_raw(raw: Vec<RawLedgerEntry>) -> IngestReport<LedgerEntry> {
    let mut converted = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();
    for record in raw {
        match convert(record) {
            Ok(entry) => converted.push(entry),
            Err(e) => warnings.push(e),
        }
    }
    let mut report = sanitize(converted);
    warnings.append(&mut report.warnings);
    report.warnings = warnings;
    report
}

/// Range-check typed entries, sort them canonically, and drop repeated ids.
///
/// Entries are sorted with [`LedgerEntry::canonical_cmp`]. The first entry of
/// each id in that order is kept, whatever the input order was.
pub fn sanitize(entries: Vec<LedgerEntry>) -> IngestReport<LedgerEntry> {
    let mut report = IngestReport::new();
    let mut valid = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.check() {
            Ok(()) => valid.push(entry),
            Err(e) => {
                warn!(error = %e, "ledger entry skipped");
                report.warn(e);
            }
        }
    }

    valid.sort_by(LedgerEntry::canonical_cmp);

    for entry in valid {
        if report.accepted.last().is_some_and(|prev: &LedgerEntry| prev.id == entry.id) {
            let e = IngestError::DuplicateId {
                entry_id: entry.id.clone(),
            };
            warn!(error = %e, "ledger entry skipped");
            report.warn(e);
        } else {
            report.accept(entry);
        }
    }
    report
}

/// Convert one raw record into a typed entry and range-check it.
pub fn convert(raw: RawLedgerEntry) -> Result<LedgerEntry, IngestError> {
    let event_time = parse_timestamp(&raw.event_time).ok_or_else(|| {
        IngestError::InvalidTimestamp {
            entry_id: raw.id.clone(),
            value: raw.event_time.clone(),
        }
    })?;
    let amount = parse_amount(&raw.amount).ok_or_else(|| IngestError::InvalidAmount {
        entry_id: raw.id.clone(),
        value: raw.amount.to_string(),
    })?;
    let event_type =
        EventType::parse(&raw.event_type).ok_or_else(|| IngestError::UnknownEventType {
            entry_id: raw.id.clone(),
            value: raw.event_type.clone(),
        })?;
    let channel = Channel::parse(&raw.channel).unwrap_or_else(|| {
        debug!(entry_id = %raw.id, channel = %raw.channel, "unknown channel mapped to other");
        Channel::Other
    });

    let entry = LedgerEntry {
        id: raw.id,
        business_id: raw.business_id,
        event_time,
        amount,
        currency: raw
            .currency
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        channel,
        event_type,
        source_evidence_id: raw.source_evidence_id,
        confidence: raw.confidence,
        attributes: EntryAttributes::from_map(event_type, raw.attributes),
    };
    entry.check()?;
    Ok(entry)
}

/// RFC 3339 first; naive date-times and bare dates are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}
