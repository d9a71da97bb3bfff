use crate::models::{EventLink, LedgerEntry};

/// Cross-source event linking.
pub trait IEventLinker: Send + Sync {
    /// Propose corroboration links between entries from different evidence sources.
    /// Must be deterministic for any permutation of `entries`.
    fn link(&self, entries: &[LedgerEntry]) -> Vec<EventLink>;
}
