use credence_core::config::InsightsConfig;
use credence_core::constants::{CROSS_SOURCE_MAX, EVIDENCE_STRENGTH_MAX};
use credence_core::models::{Channel, CredibilityScore, InsightCard, InsightType, LedgerEntry};
use serde_json::json;

/// Remedial actions for weak evidence or weak cross-source corroboration.
pub fn build(
    entries: &[LedgerEntry],
    score: &CredibilityScore,
    config: &InsightsConfig,
) -> Option<InsightCard> {
    let b = &score.breakdown;
    let weak_evidence = b.evidence_strength < config.recommendation_ratio * EVIDENCE_STRENGTH_MAX;
    let weak_cross = b.cross_source < config.recommendation_ratio * CROSS_SOURCE_MAX;
    if !weak_evidence && !weak_cross {
        return None;
    }

    let mut actions = Vec::new();
    if weak_evidence {
        let has_statement = entries.iter().any(|e| e.channel.is_statement());
        if has_statement {
            actions.push(
                "Replace hand-typed or screenshot records with exported statements or platform reports.",
            );
        } else {
            actions.push("Upload a bank or e-wallet statement to add a high-confidence source.");
        }
    }
    if weak_cross {
        let single_channel = entries
            .iter()
            .map(|e| e.channel)
            .collect::<std::collections::BTreeSet<Channel>>()
            .len()
            <= 1;
        if single_channel {
            actions.push(
                "Add records from a second channel so the same sales can be matched across sources.",
            );
        } else {
            actions.push(
                "Upload records that cover the same period across your channels so transactions can be matched.",
            );
        }
    }

    Some(
        InsightCard::new(InsightType::Recommendation, "Boost your score", actions.join(" "))
            .with_data(json!({
                "actions": actions,
                "evidence_strength": b.evidence_strength,
                "cross_source": b.cross_source,
            })),
    )
}
