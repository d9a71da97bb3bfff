//! Span definitions per component: link, anomaly, score, insights, compute.

/// Create a linking span.
#[macro_export]
macro_rules! link_span {
    ($entry_count:expr) => {
        tracing::debug_span!("credence.link", entry_count = $entry_count)
    };
}

/// Create an anomaly detection span.
#[macro_export]
macro_rules! anomaly_span {
    ($entry_count:expr) => {
        tracing::debug_span!("credence.anomaly", entry_count = $entry_count)
    };
}

/// Create a scoring span.
#[macro_export]
macro_rules! score_span {
    ($entry_count:expr, $link_count:expr) => {
        tracing::debug_span!(
            "credence.score",
            entry_count = $entry_count,
            link_count = $link_count
        )
    };
}

/// Create an insights span.
#[macro_export]
macro_rules! insights_span {
    ($entry_count:expr) => {
        tracing::debug_span!("credence.insights", entry_count = $entry_count)
    };
}

/// Create a full-pipeline span.
#[macro_export]
macro_rules! compute_span {
    ($business_id:expr, $entry_count:expr) => {
        tracing::info_span!(
            "credence.compute",
            business_id = %$business_id,
            entry_count = $entry_count
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LINK: &str = "credence.link";
    pub const ANOMALY: &str = "credence.anomaly";
    pub const SCORE: &str = "credence.score";
    pub const INSIGHTS: &str = "credence.insights";
    pub const COMPUTE: &str = "credence.compute";
}
