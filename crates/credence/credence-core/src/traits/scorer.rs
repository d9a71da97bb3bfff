use crate::models::{AnomalyFlag, CredibilityScore, EventLink, LedgerEntry};

/// Credibility scoring.
pub trait ICredibilityScorer: Send + Sync {
    /// Produce a 0–100 score with an itemized breakdown. Insights are left empty.
    fn score(
        &self,
        entries: &[LedgerEntry],
        links: &[EventLink],
        flags: &[AnomalyFlag],
    ) -> CredibilityScore;
}
