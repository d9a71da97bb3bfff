//! Two-paragraph verifier narrative.
//!
//! Paragraph one summarizes trading activity; paragraph two explains the
//! score, its strongest components, any flags, and an overall assessment.

mod builder;
mod templates;

pub use builder::{build_narrative, VerifierNarrative};
