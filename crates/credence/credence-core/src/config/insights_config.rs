use serde::{Deserialize, Serialize};

use super::defaults;

/// Insights generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Length of each trend comparison window (days).
    pub trend_window_days: i64,
    /// Runner-up weekday is reported when it reaches this share of the top day.
    pub peak_runner_up_ratio: f64,
    /// Components below this share of their maximum trigger a recommendation.
    pub recommendation_ratio: f64,
    /// Fewer distinct channels than this triggers a diversification hint.
    pub min_channels: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            trend_window_days: defaults::DEFAULT_TREND_WINDOW_DAYS,
            peak_runner_up_ratio: defaults::DEFAULT_PEAK_RUNNER_UP_RATIO,
            recommendation_ratio: defaults::DEFAULT_RECOMMENDATION_RATIO,
            min_channels: defaults::DEFAULT_MIN_CHANNELS,
        }
    }
}
