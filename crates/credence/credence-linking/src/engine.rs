use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use credence_core::config::LinkingConfig;
use credence_core::link_span;
use credence_core::models::{EventLink, LedgerEntry, LinkType, PairKey};
use credence_core::traits::IEventLinker;
use serde::Serialize;
use tracing::{debug, trace};

use crate::criteria;
use crate::keywords;

/// Per-pair evaluation, kept so a link decision can be explained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairAssessment {
    /// Strongest criterion the pair satisfies, if any.
    pub link_type: Option<LinkType>,
    pub amount_closeness: f64,
    pub time_closeness: f64,
    pub keyword_overlap: f64,
    pub similarity: f64,
}

impl PairAssessment {
    fn unlinked(keyword_overlap: f64) -> Self {
        Self {
            link_type: None,
            amount_closeness: 0.0,
            time_closeness: 0.0,
            keyword_overlap,
            similarity: 0.0,
        }
    }
}

/// Pairwise cross-source event linker.
pub struct EventLinker {
    config: LinkingConfig,
}

/// Entry with its keyword tokens extracted once.
struct Prepared<'a> {
    entry: &'a LedgerEntry,
    tokens: BTreeSet<String>,
}

impl EventLinker {
    pub fn new(config: LinkingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkingConfig {
        &self.config
    }

    /// Evaluate one pair against every criterion.
    ///
    /// Does not check evidence sources; [`IEventLinker::link`] filters
    /// same-source pairs before calling this.
    pub fn assess(&self, a: &LedgerEntry, b: &LedgerEntry) -> PairAssessment {
        let min_len = self.config.min_token_len;
        let overlap = keywords::overlap(
            &keywords::entry_tokens(a, min_len),
            &keywords::entry_tokens(b, min_len),
        );
        self.assess_with_overlap(a, b, overlap)
    }

    fn assess_with_overlap(&self, a: &LedgerEntry, b: &LedgerEntry, overlap: f64) -> PairAssessment {
        let c = &self.config;
        let amount_gap = criteria::amount_distance(a.amount, b.amount);
        let hours = criteria::hours_apart(a.event_time, b.event_time);
        let strict_amount = criteria::amount_tolerance(
            a.amount,
            b.amount,
            c.amount_tolerance_ratio,
            c.amount_tolerance_floor,
        );
        let loose_amount = criteria::amount_tolerance(
            a.amount,
            b.amount,
            c.loose_amount_tolerance_ratio,
            c.amount_tolerance_floor,
        );

        let link_type = if amount_gap <= strict_amount {
            LinkType::AmountMatch
        } else if hours <= c.time_window_hours {
            LinkType::TimeMatch
        } else if overlap > 0.0 {
            LinkType::KeywordMatch
        } else if amount_gap <= loose_amount && hours <= c.loose_time_window_hours {
            LinkType::CrossChannel
        } else {
            return PairAssessment::unlinked(overlap);
        };

        let (amount_tolerance, time_window) = if link_type == LinkType::CrossChannel {
            (loose_amount, c.loose_time_window_hours)
        } else {
            (strict_amount, c.time_window_hours)
        };
        let amount_closeness = criteria::closeness(amount_gap, amount_tolerance);
        let time_closeness = criteria::closeness(hours, time_window);
        let similarity = (c.amount_weight * amount_closeness
            + c.time_weight * time_closeness
            + c.keyword_weight * overlap)
            .clamp(0.0, 1.0);

        PairAssessment {
            link_type: Some(link_type),
            amount_closeness,
            time_closeness,
            keyword_overlap: overlap,
            similarity,
        }
    }
}

impl Default for EventLinker {
    fn default() -> Self {
        Self::new(LinkingConfig::default())
    }
}

impl IEventLinker for EventLinker {
    fn link(&self, entries: &[LedgerEntry]) -> Vec<EventLink> {
        let _span = link_span!(entries.len()).entered();

        let mut prepared: Vec<Prepared<'_>> = entries
            .iter()
            .map(|entry| Prepared {
                entry,
                tokens: keywords::entry_tokens(entry, self.config.min_token_len),
            })
            .collect();
        prepared.sort_by(|x, y| x.entry.canonical_cmp(y.entry));

        let mut links: BTreeMap<PairKey, EventLink> = BTreeMap::new();
        for (i, x) in prepared.iter().enumerate() {
            for y in &prepared[i + 1..] {
                if x.entry.id == y.entry.id
                    || x.entry.source_evidence_id == y.entry.source_evidence_id
                {
                    continue;
                }
                let overlap = keywords::overlap(&x.tokens, &y.tokens);
                let assessment = self.assess_with_overlap(x.entry, y.entry, overlap);
                let Some(link_type) = assessment.link_type else {
                    continue;
                };
                trace!(
                    a = %x.entry.id,
                    b = %y.entry.id,
                    link_type = %link_type,
                    similarity = assessment.similarity,
                    "pair assessed"
                );
                if assessment.similarity < self.config.min_similarity {
                    continue;
                }
                let link = EventLink::new(&x.entry.id, &y.entry.id, link_type, assessment.similarity);
                match links.entry(link.pair_key()) {
                    Entry::Vacant(slot) => {
                        slot.insert(link);
                    }
                    Entry::Occupied(mut slot) => {
                        let held = slot.get();
                        let stronger = (link.link_type, link.similarity_score)
                            > (held.link_type, held.similarity_score);
                        if stronger {
                            slot.insert(link);
                        }
                    }
                }
            }
        }

        debug!(link_count = links.len(), "linking complete");
        links.into_values().collect()
    }
}
