//! # credence-engine
//!
//! Entry point of the evidence fusion engine. Wires the four components
//! together over one immutable ledger snapshot:
//!
//! ```text
//! ledger ─▶ ingest ─▶ link ───────┐
//!                  └▶ detect ─────┼▶ score ─▶ insights
//!                                 │
//! ```
//!
//! Every call is a pure computation: no state is kept between calls and the
//! same snapshot always produces byte-identical output.

pub mod digest;
pub mod engine;
pub mod ingest;
pub mod report;

pub use engine::FusionEngine;
pub use ingest::RawLedgerEntry;
pub use report::FusionReport;
