use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::InsightCard;
use crate::constants::{
    ACTIVITY_MAX, BREAKDOWN_PRECISION, CONSISTENCY_MAX, CROSS_SOURCE_MAX, EVIDENCE_STRENGTH_MAX,
    LONGEVITY_MAX, PENALTY_FLOOR, SCORE_MAX,
};

/// Coarse trust label attached to a computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additive, itemized score. The final score is the clamped, rounded sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0–30.
    pub activity: f64,
    /// 0–20.
    pub consistency: f64,
    /// 0–20.
    pub longevity: f64,
    /// 0–25.
    pub evidence_strength: f64,
    /// 0–15.
    pub cross_source: f64,
    /// −20–0.
    pub penalties: f64,
}

impl ScoreBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all components, penalties included.
    pub fn total(&self) -> f64 {
        self.activity
            + self.consistency
            + self.longevity
            + self.evidence_strength
            + self.cross_source
            + self.penalties
    }

    /// Clamp every component into its bound and round to the breakdown precision.
    pub fn normalized(self) -> Self {
        Self {
            activity: bounded(self.activity, 0.0, ACTIVITY_MAX),
            consistency: bounded(self.consistency, 0.0, CONSISTENCY_MAX),
            longevity: bounded(self.longevity, 0.0, LONGEVITY_MAX),
            evidence_strength: bounded(self.evidence_strength, 0.0, EVIDENCE_STRENGTH_MAX),
            cross_source: bounded(self.cross_source, 0.0, CROSS_SOURCE_MAX),
            penalties: bounded(self.penalties, PENALTY_FLOOR, 0.0),
        }
    }

    /// Whether every component lies within its bound.
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=ACTIVITY_MAX).contains(&self.activity)
            && (0.0..=CONSISTENCY_MAX).contains(&self.consistency)
            && (0.0..=LONGEVITY_MAX).contains(&self.longevity)
            && (0.0..=EVIDENCE_STRENGTH_MAX).contains(&self.evidence_strength)
            && (0.0..=CROSS_SOURCE_MAX).contains(&self.cross_source)
            && (PENALTY_FLOOR..=0.0).contains(&self.penalties)
    }

    /// Final integer score: `clamp(round(total), 0, 100)`.
    pub fn final_score(&self) -> u8 {
        let total = self.total();
        if !total.is_finite() {
            return 0;
        }
        total.round().clamp(0.0, f64::from(SCORE_MAX)) as u8
    }

    /// Components as (name, value, maximum) rows, in display order.
    pub fn components(&self) -> [(&'static str, f64, f64); 5] {
        [
            ("activity", self.activity, ACTIVITY_MAX),
            ("consistency", self.consistency, CONSISTENCY_MAX),
            ("longevity", self.longevity, LONGEVITY_MAX),
            ("evidence_strength", self.evidence_strength, EVIDENCE_STRENGTH_MAX),
            ("cross_source", self.cross_source, CROSS_SOURCE_MAX),
        ]
    }
}

fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(BREAKDOWN_PRECISION);
    let rounded = ((value.clamp(min, max)) * factor).round() / factor;
    // Normalize negative zero so serialized output is stable.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Output of one scoring run. Recomputed fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityScore {
    /// 0–100.
    pub score: u8,
    pub confidence_level: ConfidenceLevel,
    pub breakdown: ScoreBreakdown,
    /// Names of the anomaly flags that fired.
    pub flags: Vec<String>,
    pub insights: Vec<InsightCard>,
    /// As-of instant of the scored snapshot.
    pub computed_at: DateTime<Utc>,
}

impl CredibilityScore {
    /// Score for a ledger with no usable evidence yet.
    pub fn empty(computed_at: DateTime<Utc>) -> Self {
        Self {
            score: 0,
            confidence_level: ConfidenceLevel::Low,
            breakdown: ScoreBreakdown::zero(),
            flags: Vec::new(),
            insights: Vec::new(),
            computed_at,
        }
    }
}
