//! Configuration system for Credence.
//! TOML-based with environment overrides: env > file > defaults.
//!
//! Every component receives its own section explicitly; nothing is read
//! from global state during a computation.

pub mod anomaly_config;
pub mod credence_config;
pub mod defaults;
pub mod insights_config;
pub mod linking_config;
pub mod observability_config;
pub mod scoring_config;

pub use anomaly_config::AnomalyConfig;
pub use credence_config::CredenceConfig;
pub use insights_config::InsightsConfig;
pub use linking_config::LinkingConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
