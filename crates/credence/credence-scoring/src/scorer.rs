use credence_core::calendar;
use credence_core::config::ScoringConfig;
use credence_core::models::{AnomalyFlag, CredibilityScore, EventLink, LedgerEntry, ScoreBreakdown};
use credence_core::score_span;
use credence_core::traits::ICredibilityScorer;
use tracing::debug;

use crate::components;
use crate::confidence;

/// Additive credibility scorer.
pub struct CredibilityScorer {
    config: ScoringConfig,
}

impl CredibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute each component, clamped and rounded.
    pub fn breakdown(
        &self,
        entries: &[LedgerEntry],
        links: &[EventLink],
        flags: &[AnomalyFlag],
    ) -> ScoreBreakdown {
        if entries.is_empty() {
            return ScoreBreakdown::zero();
        }
        ScoreBreakdown {
            activity: components::activity::calculate(entries, &self.config),
            consistency: components::consistency::calculate(entries, &self.config),
            longevity: components::longevity::calculate(entries, &self.config),
            evidence_strength: components::evidence::calculate(entries),
            cross_source: components::cross_source::calculate(entries, links, &self.config),
            penalties: AnomalyFlag::total_penalty(flags),
        }
        .normalized()
    }
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ICredibilityScorer for CredibilityScorer {
    fn score(
        &self,
        entries: &[LedgerEntry],
        links: &[EventLink],
        flags: &[AnomalyFlag],
    ) -> CredibilityScore {
        let _span = score_span!(entries.len(), links.len()).entered();
        let computed_at = calendar::as_of(entries);
        if entries.is_empty() {
            debug!("empty ledger, returning zero score");
            return CredibilityScore::empty(computed_at);
        }

        let breakdown = self.breakdown(entries, links, flags);
        let score = breakdown.final_score();
        let confidence_level = confidence::level(score, entries.len(), &self.config);
        debug!(
            score,
            confidence = %confidence_level,
            activity = breakdown.activity,
            consistency = breakdown.consistency,
            longevity = breakdown.longevity,
            evidence_strength = breakdown.evidence_strength,
            cross_source = breakdown.cross_source,
            penalties = breakdown.penalties,
            "score computed"
        );

        CredibilityScore {
            score,
            confidence_level,
            breakdown,
            flags: flags.iter().map(|f| f.name().to_string()).collect(),
            insights: Vec::new(),
            computed_at,
        }
    }
}
