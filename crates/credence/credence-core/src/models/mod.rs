//! Value objects exchanged between the fusion components.

pub mod anomaly;
pub mod attributes;
pub mod insight;
pub mod ledger;
pub mod link;
pub mod score;

pub use anomaly::{AnomalyFlag, FlagKind};
pub use attributes::{EntryAttributes, TypedAttributes};
pub use insight::{InsightCard, InsightType};
pub use ledger::{Channel, EventType, LedgerEntry};
pub use link::{EventLink, LinkType, PairKey};
pub use score::{ConfidenceLevel, CredibilityScore, ScoreBreakdown};
