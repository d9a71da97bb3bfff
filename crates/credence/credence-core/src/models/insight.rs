use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category of an insight card. Declared in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    PeakDay,
    Trend,
    Coverage,
    Recommendation,
}

impl InsightType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PeakDay => "peak_day",
            Self::Trend => "trend",
            Self::Coverage => "coverage",
            Self::Recommendation => "recommendation",
        }
    }
}

/// A human-readable insight with an optional structured payload for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCard {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl InsightCard {
    pub fn new(insight_type: InsightType, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            insight_type,
            title: title.into(),
            description: description.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
