use serde::{Deserialize, Serialize};

use super::defaults;

/// Event linker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingConfig {
    /// time_match window (hours).
    pub time_window_hours: f64,
    /// Looser window used for the cross_channel floor (hours).
    pub loose_time_window_hours: f64,
    /// amount_match relative tolerance.
    pub amount_tolerance_ratio: f64,
    /// cross_channel relative tolerance.
    pub loose_amount_tolerance_ratio: f64,
    /// Absolute tolerance for tiny amounts, in currency units.
    pub amount_tolerance_floor: f64,
    /// Minimum normalized token length for keyword matching.
    pub min_token_len: usize,
    /// Links below this similarity are not emitted.
    pub min_similarity: f64,
    pub amount_weight: f64,
    pub time_weight: f64,
    pub keyword_weight: f64,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            time_window_hours: defaults::DEFAULT_LINK_WINDOW_HOURS,
            loose_time_window_hours: defaults::DEFAULT_LOOSE_LINK_WINDOW_HOURS,
            amount_tolerance_ratio: defaults::DEFAULT_AMOUNT_TOLERANCE_RATIO,
            loose_amount_tolerance_ratio: defaults::DEFAULT_LOOSE_AMOUNT_TOLERANCE_RATIO,
            amount_tolerance_floor: defaults::DEFAULT_AMOUNT_TOLERANCE_FLOOR,
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            min_similarity: defaults::DEFAULT_MIN_LINK_SIMILARITY,
            amount_weight: defaults::DEFAULT_AMOUNT_WEIGHT,
            time_weight: defaults::DEFAULT_TIME_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
        }
    }
}
