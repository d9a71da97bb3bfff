//! Per-entry rejection reasons and the non-fatal ingest report.

use super::error_code::{self, ErrorCode};

/// Why a ledger entry was excluded from a computation.
///
/// These never abort scoring; they are collected as warnings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    #[error("entry {entry_id}: negative amount {amount}")]
    NegativeAmount { entry_id: String, amount: String },

    #[error("entry {entry_id}: amount {amount} exceeds the per-entry ceiling")]
    AmountOutOfRange { entry_id: String, amount: String },

    #[error("entry {entry_id}: unparseable amount {value:?}")]
    InvalidAmount { entry_id: String, value: String },

    #[error("entry {entry_id}: confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { entry_id: String, confidence: f64 },

    #[error("entry {entry_id}: unparseable timestamp {value:?}")]
    InvalidTimestamp { entry_id: String, value: String },

    #[error("entry {entry_id}: unknown event type {value:?}")]
    UnknownEventType { entry_id: String, value: String },

    #[error("entry {entry_id}: duplicate entry id")]
    DuplicateId { entry_id: String },

    #[error("entry {entry_id}: missing {field}")]
    MissingField {
        entry_id: String,
        field: &'static str,
    },
}

impl IngestError {
    pub fn entry_id(&self) -> &str {
        match self {
            Self::NegativeAmount { entry_id, .. }
            | Self::AmountOutOfRange { entry_id, .. }
            | Self::InvalidAmount { entry_id, .. }
            | Self::ConfidenceOutOfRange { entry_id, .. }
            | Self::InvalidTimestamp { entry_id, .. }
            | Self::UnknownEventType { entry_id, .. }
            | Self::DuplicateId { entry_id }
            | Self::MissingField { entry_id, .. } => entry_id,
        }
    }
}

impl ErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => error_code::NEGATIVE_AMOUNT,
            Self::AmountOutOfRange { .. } => error_code::AMOUNT_OUT_OF_RANGE,
            Self::InvalidAmount { .. } => error_code::INVALID_AMOUNT,
            Self::ConfidenceOutOfRange { .. } => error_code::CONFIDENCE_OUT_OF_RANGE,
            Self::InvalidTimestamp { .. } => error_code::INVALID_TIMESTAMP,
            Self::UnknownEventType { .. } => error_code::UNKNOWN_EVENT_TYPE,
            Self::DuplicateId { .. } => error_code::DUPLICATE_ENTRY_ID,
            Self::MissingField { .. } => error_code::MISSING_FIELD,
        }
    }
}

/// Accepted entries plus the warnings for everything that was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport<T> {
    pub accepted: Vec<T>,
    pub warnings: Vec<IngestError>,
}

impl<T> IngestReport<T> {
    pub fn new() -> Self {
        Self {
            accepted: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn accept(&mut self, item: T) {
        self.accepted.push(item);
    }

    pub fn warn(&mut self, warning: IngestError) {
        self.warnings.push(warning);
    }

    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
