use std::collections::BTreeSet;

use credence_core::calendar;
use credence_core::models::{Channel, CredibilityScore, LedgerEntry};
use rust_decimal::Decimal;
use serde::Serialize;

use super::templates;
use crate::cards::ringgit;

/// Narrative addressed to a lender or NGO verifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifierNarrative {
    pub activity: String,
    pub assessment: String,
}

impl VerifierNarrative {
    /// Both paragraphs separated by a blank line.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.activity, self.assessment)
    }
}

pub fn build_narrative(entries: &[LedgerEntry], score: &CredibilityScore) -> VerifierNarrative {
    VerifierNarrative {
        activity: activity_paragraph(entries),
        assessment: assessment_paragraph(score),
    }
}

fn activity_paragraph(entries: &[LedgerEntry]) -> String {
    let Some((first, last)) = calendar::date_span(entries) else {
        return "No transactions have been recorded for this business yet.".to_string();
    };
    let total = entries
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));
    let channels: BTreeSet<Channel> = entries.iter().map(|e| e.channel).collect();
    let channel_labels: Vec<String> = channels.iter().map(|c| c.label().to_string()).collect();

    let start = first.format("%B %Y").to_string();
    let end = last.format("%B %Y").to_string();
    let period = if start == end {
        format!("In {start}")
    } else {
        format!("Between {start} and {end}")
    };
    let noun = if entries.len() == 1 { "transaction" } else { "transactions" };
    format!(
        "{period} the business recorded {} {noun} totalling {}, evidenced through {}.",
        entries.len(),
        ringgit(total),
        templates::join_list(&channel_labels),
    )
}

fn assessment_paragraph(score: &CredibilityScore) -> String {
    let mut sentences = vec![format!(
        "The credibility score is {} out of 100, with {} confidence.",
        score.score,
        score.confidence_level.name().to_lowercase()
    )];

    // Strongest two components relative to their ceilings; display order breaks ties.
    let mut components: Vec<_> = score
        .breakdown
        .components()
        .into_iter()
        .filter(|(_, value, _)| *value > 0.0)
        .collect();
    components.sort_by(|a, b| (b.1 / b.2).total_cmp(&(a.1 / a.2)));
    let strongest: Vec<String> = components
        .iter()
        .take(2)
        .map(|(name, value, max)| {
            format!("{} ({value:.1} of {max:.0})", templates::component_label(name))
        })
        .collect();
    if !strongest.is_empty() {
        sentences.push(format!(
            "Its strongest areas are {}.",
            templates::join_list(&strongest)
        ));
    }

    if score.flags.is_empty() {
        sentences.push("No data quality issues were flagged.".to_string());
    } else {
        let notes: Vec<String> = score
            .flags
            .iter()
            .map(|f| templates::flag_description(f))
            .collect();
        sentences.push(format!("Data quality notes: {}.", templates::join_list(&notes)));
    }

    sentences.push(templates::assessment(score.confidence_level).to_string());
    sentences.join(" ")
}
