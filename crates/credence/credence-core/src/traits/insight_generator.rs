use crate::models::{CredibilityScore, InsightCard, LedgerEntry};

/// Insight card generation.
pub trait IInsightGenerator: Send + Sync {
    /// Cards in presentation order: peak_day, trend, coverage, recommendation.
    fn generate(&self, entries: &[LedgerEntry], score: &CredibilityScore) -> Vec<InsightCard>;
}
