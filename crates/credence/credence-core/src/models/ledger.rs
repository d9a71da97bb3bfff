use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attributes::EntryAttributes;
use crate::constants::{DEFAULT_CURRENCY, MAX_ENTRY_AMOUNT};
use crate::errors::IngestError;

/// Channel the economic event was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Whatsapp,
    Grabfood,
    Shopee,
    Foodpanda,
    Lazada,
    Tng,
    Bank,
    Cash,
    Other,
}

impl Channel {
    pub const ALL: [Channel; 9] = [
        Self::Whatsapp,
        Self::Grabfood,
        Self::Shopee,
        Self::Foodpanda,
        Self::Lazada,
        Self::Tng,
        Self::Bank,
        Self::Cash,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Grabfood => "grabfood",
            Self::Shopee => "shopee",
            Self::Foodpanda => "foodpanda",
            Self::Lazada => "lazada",
            Self::Tng => "tng",
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Other => "other",
        }
    }

    /// Parse a channel name, case-insensitively. Returns `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(value))
    }

    /// Statement channels (bank, e-wallet) come from institution-issued records.
    pub fn is_statement(&self) -> bool {
        matches!(self, Self::Bank | Self::Tng)
    }

    /// Human-facing label used in insight text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Grabfood => "GrabFood",
            Self::Shopee => "Shopee",
            Self::Foodpanda => "foodpanda",
            Self::Lazada => "Lazada",
            Self::Tng => "Touch 'n Go eWallet",
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of economic event a ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Order,
    Payment,
    Payout,
    Refund,
}

impl EventType {
    pub const ALL: [EventType; 4] = [Self::Order, Self::Payment, Self::Payout, Self::Refund];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Payment => "payment",
            Self::Payout => "payout",
            Self::Refund => "refund",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized economic event derived from a piece of evidence.
///
/// Produced once by the extraction stage and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub business_id: String,
    pub event_time: DateTime<Utc>,
    /// Fixed-point amount in `currency`. Must be non-negative.
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub channel: Channel,
    pub event_type: EventType,
    /// Evidence document this entry was extracted from.
    pub source_evidence_id: String,
    /// Extraction-time certainty in [0.0, 1.0].
    pub confidence: f64,
    #[serde(default)]
    pub attributes: EntryAttributes,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl LedgerEntry {
    /// UTC calendar date of the event.
    pub fn event_date(&self) -> NaiveDate {
        self.event_time.date_naive()
    }

    /// Total order over every field: (id, event time, source, amount) first,
    /// then the rest. Two entries compare equal only when they are identical.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.event_time.cmp(&other.event_time))
            .then_with(|| self.source_evidence_id.cmp(&other.source_evidence_id))
            .then_with(|| self.amount.cmp(&other.amount))
            .then_with(|| self.amount.scale().cmp(&other.amount.scale()))
            .then_with(|| self.confidence.total_cmp(&other.confidence))
            .then_with(|| self.channel.cmp(&other.channel))
            .then_with(|| self.event_type.cmp(&other.event_type))
            .then_with(|| self.business_id.cmp(&other.business_id))
            .then_with(|| self.currency.cmp(&other.currency))
            .then_with(|| {
                let a = serde_json::to_string(&self.attributes).unwrap_or_default();
                let b = serde_json::to_string(&other.attributes).unwrap_or_default();
                a.cmp(&b)
            })
    }

    /// Range sanity checks applied before an entry takes part in a computation.
    pub fn check(&self) -> Result<(), IngestError> {
        if self.id.trim().is_empty() {
            return Err(IngestError::MissingField {
                entry_id: self.id.clone(),
                field: "id",
            });
        }
        if self.source_evidence_id.trim().is_empty() {
            return Err(IngestError::MissingField {
                entry_id: self.id.clone(),
                field: "source_evidence_id",
            });
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(IngestError::NegativeAmount {
                entry_id: self.id.clone(),
                amount: self.amount.to_string(),
            });
        }
        if self.amount > MAX_ENTRY_AMOUNT {
            return Err(IngestError::AmountOutOfRange {
                entry_id: self.id.clone(),
                amount: self.amount.to_string(),
            });
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(IngestError::ConfidenceOutOfRange {
                entry_id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}
