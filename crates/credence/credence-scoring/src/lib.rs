//! # credence-scoring
//!
//! Turns a ledger, its cross-source links, and its anomaly flags into a
//! 0–100 credibility score.
//!
//! ```text
//! score = clamp(round(activity + consistency + longevity
//!                     + evidence_strength + cross_source + penalties), 0, 100)
//! ```
//!
//! Every component is clamped to its ceiling and rounded to two decimals
//! before summing, so the published breakdown adds up to the score.

pub mod components;
pub mod confidence;
pub mod scorer;

pub use scorer::CredibilityScorer;
