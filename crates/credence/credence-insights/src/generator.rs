use credence_core::config::InsightsConfig;
use credence_core::insights_span;
use credence_core::models::{CredibilityScore, InsightCard, LedgerEntry};
use credence_core::traits::IInsightGenerator;
use tracing::debug;

use crate::cards;

/// Builds insight cards in a fixed order: peak_day, trend, coverage, recommendation.
pub struct InsightsGenerator {
    config: InsightsConfig,
}

impl InsightsGenerator {
    pub fn new(config: InsightsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InsightsConfig {
        &self.config
    }
}

impl Default for InsightsGenerator {
    fn default() -> Self {
        Self::new(InsightsConfig::default())
    }
}

impl IInsightGenerator for InsightsGenerator {
    fn generate(&self, entries: &[LedgerEntry], score: &CredibilityScore) -> Vec<InsightCard> {
        let _span = insights_span!(entries.len()).entered();
        if entries.is_empty() {
            return Vec::new();
        }
        let c = &self.config;
        let cards: Vec<InsightCard> = [
            cards::peak_day::build(entries, c),
            cards::trend::build(entries, c),
            cards::coverage::build(entries, c),
            cards::recommendation::build(entries, score, c),
        ]
        .into_iter()
        .flatten()
        .collect();
        debug!(card_count = cards.len(), "insights generated");
        cards
    }
}
