use credence_anomaly::AnomalyDetector;
use credence_core::models::{AnomalyFlag, LedgerEntry};
use credence_core::traits::IAnomalyDetector;
use proptest::prelude::*;
use test_fixtures::entry;

fn arb_ledger() -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec((0u32..500, 0u32..100, 0i64..60 * 24 * 60, 0usize..3), 0..60).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (whole, cents, minutes, source))| {
                    entry(&format!("e{i:03}"))
                        .amount(&format!("{whole}.{cents:02}"))
                        .at_minutes(minutes)
                        .source(&format!("ev-{source}"))
                        .build()
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn penalty_is_bounded(entries in arb_ledger()) {
        let (flags, penalty) = AnomalyDetector::default().detect_with_penalty(&entries);
        prop_assert!((-20.0..=0.0).contains(&penalty));
        prop_assert_eq!(penalty, AnomalyFlag::total_penalty(&flags));
        for flag in &flags {
            prop_assert!(flag.severity.is_finite() && flag.severity >= 0.0);
        }
    }

    #[test]
    fn detection_ignores_input_order(entries in arb_ledger()) {
        let detector = AnomalyDetector::default();
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(detector.detect(&entries), detector.detect(&reversed));
    }
}
