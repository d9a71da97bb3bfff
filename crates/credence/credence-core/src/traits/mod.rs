//! Seams between the four fusion components.

pub mod anomaly_detector;
pub mod event_linker;
pub mod insight_generator;
pub mod scorer;

pub use anomaly_detector::IAnomalyDetector;
pub use event_linker::IEventLinker;
pub use insight_generator::IInsightGenerator;
pub use scorer::ICredibilityScorer;
