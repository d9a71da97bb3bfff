use crate::models::{AnomalyFlag, LedgerEntry};

/// Ledger-wide anomaly detection.
pub trait IAnomalyDetector: Send + Sync {
    /// Evaluate every check over the full entry set of one business.
    fn detect(&self, entries: &[LedgerEntry]) -> Vec<AnomalyFlag>;
}
