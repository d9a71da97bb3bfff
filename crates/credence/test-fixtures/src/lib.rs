//! Test fixtures for Credence: a fluent ledger builder and golden ledger loading.
//!
//! Shared by the integration tests of every crate in the workspace.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use credence_core::models::{Channel, EntryAttributes, EventType, LedgerEntry};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Monday 2024-01-01 00:00 UTC. Fixed so tests never depend on the wall clock.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Parse a decimal literal like `"24.00"`.
pub fn money(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| panic!("bad decimal {value}: {e}"))
}

/// Builder for a single ledger entry with sensible defaults.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    entry: LedgerEntry,
}

impl EntryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            entry: LedgerEntry {
                id: id.to_string(),
                business_id: "biz-1".to_string(),
                event_time: epoch(),
                amount: money("10.00"),
                currency: "MYR".to_string(),
                channel: Channel::Whatsapp,
                event_type: EventType::Payment,
                source_evidence_id: "ev-whatsapp".to_string(),
                confidence: 0.8,
                attributes: EntryAttributes::default(),
            },
        }
    }

    pub fn business(mut self, business_id: &str) -> Self {
        self.entry.business_id = business_id.to_string();
        self
    }

    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.entry.event_time = time;
        self
    }

    /// Offset from [`epoch`] in minutes.
    pub fn at_minutes(self, minutes: i64) -> Self {
        self.at(epoch() + Duration::minutes(minutes))
    }

    /// Offset from [`epoch`] in days (noon UTC).
    pub fn on_day(self, day: i64) -> Self {
        self.at(epoch() + Duration::days(day) + Duration::hours(12))
    }

    pub fn amount(mut self, value: &str) -> Self {
        self.entry.amount = money(value);
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.entry.channel = channel;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.entry.event_type = event_type;
        self
    }

    pub fn source(mut self, source_evidence_id: &str) -> Self {
        self.entry.source_evidence_id = source_evidence_id.to_string();
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.entry.confidence = confidence;
        self
    }

    /// Set free-form attributes; known keys are lifted into the typed part.
    pub fn attributes(mut self, attrs: Value) -> Self {
        let map = attrs.as_object().cloned().unwrap_or_default();
        self.entry.attributes = EntryAttributes::from_map(self.entry.event_type, map);
        self
    }

    pub fn build(self) -> LedgerEntry {
        self.entry
    }
}

/// Shorthand for [`EntryBuilder::new`].
pub fn entry(id: &str) -> EntryBuilder {
    EntryBuilder::new(id)
}

/// `days` consecutive daily entries of `amount`, one per day at noon, from one source.
pub fn daily_ledger(days: i64, amount: &str, source: &str, channel: Channel) -> Vec<LedgerEntry> {
    (0..days)
        .map(|d| {
            entry(&format!("{source}-{d:04}"))
                .on_day(d)
                .amount(amount)
                .source(source)
                .channel(channel)
                .build()
        })
        .collect()
}

/// Root directory of the ledger fixtures.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Walk up from whichever crate is running until the fixtures crate is found.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
