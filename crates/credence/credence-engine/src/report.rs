use credence_core::errors::{ErrorCode, IngestError};
use credence_core::models::{AnomalyFlag, CredibilityScore, EventLink};
use credence_insights::VerifierNarrative;
use credence_linking::LinkSummary;
use serde::{Serialize, Serializer};

/// Everything one compute request produces for one business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusionReport {
    /// `None` for an empty ledger or one mixing several businesses.
    pub business_id: Option<String>,
    pub score: CredibilityScore,
    /// Fired flags with their severity and detail.
    pub flags: Vec<AnomalyFlag>,
    pub links: Vec<EventLink>,
    pub link_summary: LinkSummary,
    pub narrative: VerifierNarrative,
    /// Entries excluded at ingestion, serialized as `[CODE] message`.
    #[serde(serialize_with = "coded_warnings")]
    pub warnings: Vec<IngestError>,
    /// blake3 digest of the accepted entries.
    pub ledger_digest: String,
}

impl FusionReport {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

fn coded_warnings<S: Serializer>(warnings: &[IngestError], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(warnings.iter().map(|w| w.coded_string()))
}
