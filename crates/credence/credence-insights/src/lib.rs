//! # credence-insights
//!
//! Human-readable output for a scored ledger: insight cards for the business
//! owner and a two-paragraph narrative for a third-party verifier. Both are
//! template-based and deterministic.

pub mod cards;
pub mod generator;
pub mod narrative;

pub use generator::InsightsGenerator;
pub use narrative::{build_narrative, VerifierNarrative};
