use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PENALTY_FLOOR;

/// Named ledger-wide condition raised by the anomaly detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    SpikeDetected,
    RoundNumberPattern,
    DuplicateUpload,
    MissingPeriod,
    UniformIntervals,
}

impl FlagKind {
    pub const ALL: [FlagKind; 5] = [
        Self::SpikeDetected,
        Self::RoundNumberPattern,
        Self::DuplicateUpload,
        Self::MissingPeriod,
        Self::UniformIntervals,
    ];

    /// Look up a flag kind by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SpikeDetected => "spike_detected",
            Self::RoundNumberPattern => "round_number_pattern",
            Self::DuplicateUpload => "duplicate_upload",
            Self::MissingPeriod => "missing_period",
            Self::UniformIntervals => "uniform_intervals",
        }
    }

    /// Data-completeness notes, as opposed to fraud-adjacent signals.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::MissingPeriod)
    }

    /// Plain-language description for reports.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::SpikeDetected => "an unusual revenue spike was detected",
            Self::RoundNumberPattern => "a high proportion of round-number amounts was detected",
            Self::DuplicateUpload => "possible duplicate data was detected",
            Self::MissingPeriod => "a gap in activity was detected",
            Self::UniformIntervals => "suspiciously uniform transaction intervals were detected",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A severity-weighted anomaly attached to a business's ledger as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFlag {
    pub kind: FlagKind,
    /// Penalty points this flag contributes (non-negative).
    pub severity: f64,
    pub detail: String,
}

impl AnomalyFlag {
    pub fn new(kind: FlagKind, severity: f64, detail: impl Into<String>) -> Self {
        let severity = if severity.is_finite() { severity.max(0.0) } else { 0.0 };
        Self {
            kind,
            severity,
            detail: detail.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Negative sum of severities, clamped to [PENALTY_FLOOR, 0].
    pub fn total_penalty(flags: &[AnomalyFlag]) -> f64 {
        let sum: f64 = flags.iter().map(|f| f.severity).sum();
        if sum <= 0.0 {
            return 0.0;
        }
        (-sum).max(PENALTY_FLOOR)
    }
}
