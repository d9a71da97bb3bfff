use credence_core::anomaly_span;
use credence_core::config::AnomalyConfig;
use credence_core::models::{AnomalyFlag, LedgerEntry};
use credence_core::traits::IAnomalyDetector;
use tracing::{debug, info};

use crate::checks;

/// Runs every anomaly check over one business's ledger.
pub struct AnomalyDetector {
    config: AnomalyConfig,
}

impl AnomalyDetector {
    pub fn new(config: AnomalyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnomalyConfig {
        &self.config
    }

    /// Detect and return the flags together with their total penalty.
    pub fn detect_with_penalty(&self, entries: &[LedgerEntry]) -> (Vec<AnomalyFlag>, f64) {
        let flags = self.detect(entries);
        let penalty = AnomalyFlag::total_penalty(&flags);
        (flags, penalty)
    }
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new(AnomalyConfig::default())
    }
}

impl IAnomalyDetector for AnomalyDetector {
    fn detect(&self, entries: &[LedgerEntry]) -> Vec<AnomalyFlag> {
        let _span = anomaly_span!(entries.len()).entered();
        if entries.is_empty() {
            return Vec::new();
        }

        let c = &self.config;
        let flags: Vec<AnomalyFlag> = [
            checks::spike::check(entries, c),
            checks::round_number::check(entries, c),
            checks::duplicate::check(entries, c),
            checks::gap::check(entries, c),
            checks::uniform_intervals::check(entries, c),
        ]
        .into_iter()
        .flatten()
        .collect();

        for flag in &flags {
            info!(flag = %flag.kind, severity = flag.severity, detail = %flag.detail, "anomaly flagged");
        }
        debug!(flag_count = flags.len(), "anomaly detection complete");
        flags
    }
}
