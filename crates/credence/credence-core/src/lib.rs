//! # credence-core
//!
//! Foundation crate for the Credence evidence fusion engine.
//! Defines the ledger data model, component traits, errors, config,
//! calendar helpers, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CredenceConfig;
pub use errors::{CredenceError, CredenceResult};
pub use models::{
    AnomalyFlag, Channel, ConfidenceLevel, CredibilityScore, EntryAttributes, EventLink,
    EventType, FlagKind, InsightCard, InsightType, LedgerEntry, LinkType, ScoreBreakdown,
};
