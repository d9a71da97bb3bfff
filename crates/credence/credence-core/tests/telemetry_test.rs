use credence_core::config::ObservabilityConfig;
use credence_core::telemetry::{self, spans::names};

#[test]
fn init_is_idempotent() {
    telemetry::init_with(&ObservabilityConfig {
        json_logs: true,
        ..Default::default()
    });
    telemetry::init_tracing();
    telemetry::init_tracing();

    let span = credence_core::compute_span!("biz-1", 3usize);
    let _guard = span.enter();
    tracing::info!("tracing initialized");
}

#[test]
fn span_names_are_namespaced() {
    for name in [
        names::LINK,
        names::ANOMALY,
        names::SCORE,
        names::INSIGHTS,
        names::COMPUTE,
    ] {
        assert!(name.starts_with("credence."), "{name}");
    }
}
