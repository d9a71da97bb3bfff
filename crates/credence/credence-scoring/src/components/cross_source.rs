use credence_core::config::ScoringConfig;
use credence_core::constants::CROSS_SOURCE_MAX;
use credence_core::models::{EventLink, LedgerEntry};
use credence_linking::linked_source_pairs;

/// Cross-source component: `min(15, distinct_source_pairs_linked × 3)`.
///
/// Counts unordered pairs of evidence sources, not links, so many links
/// between the same two exports earn the points once.
pub fn calculate(entries: &[LedgerEntry], links: &[EventLink], config: &ScoringConfig) -> f64 {
    let pairs = linked_source_pairs(entries, links).len();
    (pairs as f64 * config.cross_source_points_per_pair).min(CROSS_SOURCE_MAX)
}
