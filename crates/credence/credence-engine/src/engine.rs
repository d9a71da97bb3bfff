use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use credence_anomaly::AnomalyDetector;
use credence_core::compute_span;
use credence_core::config::CredenceConfig;
use credence_core::errors::{CredenceResult, IngestReport};
use credence_core::models::{CredibilityScore, InsightCard, LedgerEntry};
use credence_core::traits::{
    IAnomalyDetector, ICredibilityScorer, IEventLinker, IInsightGenerator,
};
use credence_insights::{build_narrative, InsightsGenerator};
use credence_linking::{EventLinker, LinkSummary};
use credence_scoring::CredibilityScorer;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::digest::ledger_digest;
use crate::ingest::{self, RawLedgerEntry};
use crate::report::FusionReport;

/// The evidence fusion engine: link, detect, score, explain.
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent requests.
pub struct FusionEngine {
    linker: EventLinker,
    detector: AnomalyDetector,
    scorer: CredibilityScorer,
    insights: InsightsGenerator,
}

impl FusionEngine {
    pub fn new(config: &CredenceConfig) -> Self {
        Self {
            linker: EventLinker::new(config.linking.clone()),
            detector: AnomalyDetector::new(config.anomaly.clone()),
            scorer: CredibilityScorer::new(config.scoring.clone()),
            insights: InsightsGenerator::new(config.insights.clone()),
        }
    }

    /// Build from a TOML config file with `CREDENCE_*` overrides applied.
    pub fn from_config_file(path: &Path) -> CredenceResult<Self> {
        let config = CredenceConfig::load(path)?;
        Ok(Self::new(&config))
    }

    /// Score a ledger snapshot, insights included.
    pub fn compute_score(&self, entries: &[LedgerEntry]) -> CredibilityScore {
        self.compute(entries).score
    }

    /// Insight cards for an already computed score.
    pub fn generate_insights(
        &self,
        entries: &[LedgerEntry],
        score: &CredibilityScore,
    ) -> Vec<InsightCard> {
        let sanitized = ingest::sanitize(entries.to_vec());
        self.insights.generate(&sanitized.accepted, score)
    }

    /// Full pipeline over typed entries.
    pub fn compute(&self, entries: &[LedgerEntry]) -> FusionReport {
        self.run(ingest::sanitize(entries.to_vec()))
    }

    /// Full pipeline over raw extractor records.
    pub fn compute_raw(&self, raw: Vec<RawLedgerEntry>) -> FusionReport {
        self.run(ingest::ingest_raw(raw))
    }

    /// Score many businesses in parallel, one task per business.
    pub fn compute_many(&self, entries: Vec<LedgerEntry>) -> BTreeMap<String, FusionReport> {
        let mut by_business: BTreeMap<String, Vec<LedgerEntry>> = BTreeMap::new();
        for entry in entries {
            by_business
                .entry(entry.business_id.clone())
                .or_default()
                .push(entry);
        }
        by_business
            .into_par_iter()
            .map(|(business_id, ledger)| {
                let report = self.compute(&ledger);
                (business_id, report)
            })
            .collect()
    }

    fn run(&self, ingested: IngestReport<LedgerEntry>) -> FusionReport {
        let IngestReport { accepted: entries, warnings } = ingested;

        let businesses: BTreeSet<&str> = entries.iter().map(|e| e.business_id.as_str()).collect();
        let business_id = match businesses.len() {
            1 => businesses.first().map(|b| b.to_string()),
            0 => None,
            n => {
                warn!(business_count = n, "ledger mixes several businesses");
                None
            }
        };
        let _span = compute_span!(business_id.as_deref().unwrap_or("-"), entries.len()).entered();

        let links = self.linker.link(&entries);
        let flags = self.detector.detect(&entries);
        let mut score = self.scorer.score(&entries, &links, &flags);
        score.insights = self.insights.generate(&entries, &score);

        let link_summary = LinkSummary::from_links(&entries, &links);
        let narrative = build_narrative(&entries, &score);
        let ledger_digest = ledger_digest(&entries);

        info!(
            score = score.score,
            confidence = %score.confidence_level,
            links = links.len(),
            flags = flags.len(),
            skipped = warnings.len(),
            "ledger scored"
        );

        FusionReport {
            business_id,
            score,
            flags,
            links,
            link_summary,
            narrative,
            warnings,
            ledger_digest,
        }
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new(&CredenceConfig::default())
    }
}
