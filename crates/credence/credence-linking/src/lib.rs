//! # credence-linking
//!
//! Proposes pairwise corroboration links between ledger entries that come
//! from different evidence sources.
//!
//! ## Criteria (strongest first)
//! 1. **amount_match**: amounts within `max(1.00, 2%)`
//! 2. **time_match**: timestamps within the linking window (24 h)
//! 3. **keyword_match**: a shared normalized token in free-text attributes
//! 4. **cross_channel**: amount within 5% and time within 48 h
//!
//! Similarity is `0.5 × amount + 0.3 × time + 0.2 × keyword` closeness;
//! only links at or above the configured minimum are emitted.

pub mod criteria;
pub mod engine;
pub mod keywords;
pub mod summary;

pub use engine::{EventLinker, PairAssessment};
pub use summary::{linked_source_pairs, LinkSummary};
