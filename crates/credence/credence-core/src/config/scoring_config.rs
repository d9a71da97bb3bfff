use serde::{Deserialize, Serialize};

use super::defaults;

/// Credibility scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub activity_per_active_week: f64,
    pub activity_per_weekly_transaction: f64,
    /// Fewer calendar weeks than this yields no consistency points.
    pub consistency_min_weeks: usize,
    /// Days of span per longevity point.
    pub longevity_days_per_point: f64,
    pub cross_source_points_per_pair: f64,
    /// HIGH requires both of these.
    pub high_min_score: u8,
    pub high_min_entries: usize,
    /// MEDIUM requires either of these.
    pub medium_min_score: u8,
    pub medium_min_entries: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            activity_per_active_week: defaults::DEFAULT_ACTIVITY_PER_ACTIVE_WEEK,
            activity_per_weekly_transaction: defaults::DEFAULT_ACTIVITY_PER_WEEKLY_TRANSACTION,
            consistency_min_weeks: defaults::DEFAULT_CONSISTENCY_MIN_WEEKS,
            longevity_days_per_point: defaults::DEFAULT_LONGEVITY_DAYS_PER_POINT,
            cross_source_points_per_pair: defaults::DEFAULT_CROSS_SOURCE_POINTS_PER_PAIR,
            high_min_score: defaults::DEFAULT_HIGH_MIN_SCORE,
            high_min_entries: defaults::DEFAULT_HIGH_MIN_ENTRIES,
            medium_min_score: defaults::DEFAULT_MEDIUM_MIN_SCORE,
            medium_min_entries: defaults::DEFAULT_MEDIUM_MIN_ENTRIES,
        }
    }
}
