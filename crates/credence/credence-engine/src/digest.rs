//! Content digest of a ledger snapshot.
//!
//! Lets a verifier confirm a score was recomputed from the same export.
//! Entries are hashed in canonical order, so input order does not matter.

use credence_core::models::LedgerEntry;

const FIELD_SEP: u8 = 0x1f;
const RECORD_SEP: u8 = 0x1e;

/// Hex blake3 digest over canonically ordered entries.
pub fn ledger_digest(entries: &[LedgerEntry]) -> String {
    let mut ordered: Vec<&LedgerEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| a.canonical_cmp(b));

    let mut hasher = blake3::Hasher::new();
    for entry in ordered {
        let event_time = entry.event_time.to_rfc3339();
        let amount = entry.amount.normalize().to_string();
        let confidence = entry.confidence.to_string();
        let attributes = serde_json::to_string(&entry.attributes).unwrap_or_default();
        let fields: [&str; 10] = [
            &entry.id,
            &entry.business_id,
            &event_time,
            &amount,
            &entry.currency,
            entry.channel.name(),
            entry.event_type.name(),
            &entry.source_evidence_id,
            &confidence,
            &attributes,
        ];
        for field in fields {
            hasher.update(field.as_bytes());
            hasher.update(&[FIELD_SEP]);
        }
        hasher.update(&[RECORD_SEP]);
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use credence_core::models::{Channel, EntryAttributes, EventType};
    use rust_decimal::Decimal;

    fn entry(id: &str, cents: i64) -> LedgerEntry {
        LedgerEntry {
            id: id.to_string(),
            business_id: "b".to_string(),
            event_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            amount: Decimal::new(cents, 2),
            currency: "MYR".to_string(),
            channel: Channel::Cash,
            event_type: EventType::Payment,
            source_evidence_id: "ev".to_string(),
            confidence: 0.5,
            attributes: EntryAttributes::default(),
        }
    }

    #[test]
    fn digest_ignores_order_and_scale() {
        let a = vec![entry("x", 1000), entry("y", 250)];
        let b = vec![entry("y", 250), entry("x", 1000)];
        assert_eq!(ledger_digest(&a), ledger_digest(&b));

        let mut rescaled = a.clone();
        rescaled[0].amount = Decimal::new(10, 0);
        assert_eq!(ledger_digest(&a), ledger_digest(&rescaled));
    }

    #[test]
    fn digest_changes_with_content() {
        let a = vec![entry("x", 1000)];
        let b = vec![entry("x", 1001)];
        assert_ne!(ledger_digest(&a), ledger_digest(&b));
        assert_eq!(ledger_digest(&[]).len(), 64);
    }
}
