//! # credence-anomaly
//!
//! Ledger-wide checks that make a credibility score resistant to padding and
//! fabricated records. Every check runs independently; each fired check
//! contributes a severity-weighted [`AnomalyFlag`](credence_core::models::AnomalyFlag).
//! The total penalty is `−Σ severity`, floored at −20.

pub mod checks;
pub mod detector;

pub use detector::AnomalyDetector;
