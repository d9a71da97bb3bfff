//! Aggregate view over a link set.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use credence_core::models::{EventLink, LedgerEntry, LinkType, PairKey};
use serde::Serialize;

/// Counts describing how much of a ledger is corroborated across sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkSummary {
    pub total_links: usize,
    pub by_type: BTreeMap<LinkType, usize>,
    /// Unordered evidence-source pairs with at least one link.
    pub distinct_source_pairs: usize,
    /// Entries taking part in at least one link.
    pub corroborated_entries: usize,
    pub mean_similarity: f64,
}

impl LinkSummary {
    pub fn from_links(entries: &[LedgerEntry], links: &[EventLink]) -> Self {
        let mut by_type = BTreeMap::new();
        let mut corroborated = BTreeSet::new();
        for link in links {
            *by_type.entry(link.link_type).or_insert(0) += 1;
            corroborated.insert(link.entry_a_id.as_str());
            corroborated.insert(link.entry_b_id.as_str());
        }
        let mean_similarity = if links.is_empty() {
            0.0
        } else {
            links.iter().map(|l| l.similarity_score).sum::<f64>() / links.len() as f64
        };
        Self {
            total_links: links.len(),
            by_type,
            distinct_source_pairs: linked_source_pairs(entries, links).len(),
            corroborated_entries: corroborated.len(),
            mean_similarity,
        }
    }

    /// Share of entries corroborated by at least one other source.
    pub fn coverage(&self, entry_count: usize) -> f64 {
        if entry_count == 0 {
            0.0
        } else {
            self.corroborated_entries as f64 / entry_count as f64
        }
    }
}

/// Distinct unordered source-evidence pairs joined by at least one link.
/// Links naming unknown entry ids are ignored.
pub fn linked_source_pairs(entries: &[LedgerEntry], links: &[EventLink]) -> BTreeSet<PairKey> {
    let sources: HashMap<&str, &str> = entries
        .iter()
        .map(|e| (e.id.as_str(), e.source_evidence_id.as_str()))
        .collect();
    links
        .iter()
        .filter_map(|link| {
            let a = sources.get(link.entry_a_id.as_str())?;
            let b = sources.get(link.entry_b_id.as_str())?;
            let key = PairKey::new(a, b);
            (!key.is_reflexive()).then_some(key)
        })
        .collect()
}
