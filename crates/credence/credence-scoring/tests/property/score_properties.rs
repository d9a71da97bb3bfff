use credence_anomaly::AnomalyDetector;
use credence_core::models::LedgerEntry;
use credence_core::traits::{IAnomalyDetector, ICredibilityScorer, IEventLinker};
use credence_linking::EventLinker;
use credence_scoring::CredibilityScorer;
use proptest::prelude::*;
use test_fixtures::entry;

fn arb_ledger() -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec(
        (0u32..2000, 0u32..100, 0i64..120 * 24 * 60, 0usize..4, 0.0f64..=1.0),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (whole, cents, minutes, source, confidence))| {
                entry(&format!("e{i:03}"))
                    .amount(&format!("{whole}.{cents:02}"))
                    .at_minutes(minutes)
                    .source(&format!("ev-{source}"))
                    .confidence(confidence)
                    .build()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn score_and_components_stay_in_bounds(entries in arb_ledger()) {
        let links = EventLinker::default().link(&entries);
        let flags = AnomalyDetector::default().detect(&entries);
        let score = CredibilityScorer::default().score(&entries, &links, &flags);

        prop_assert!(score.score <= 100);
        prop_assert!(score.breakdown.is_within_bounds());
        let expected = score.breakdown.total().round().clamp(0.0, 100.0) as u8;
        prop_assert_eq!(score.score, expected);
        prop_assert_eq!(score.flags.len(), flags.len());
    }

    #[test]
    fn scoring_is_permutation_independent(entries in arb_ledger()) {
        let scorer = CredibilityScorer::default();
        let linker = EventLinker::default();
        let detector = AnomalyDetector::default();

        let mut reversed = entries.clone();
        reversed.reverse();

        let a = scorer.score(&entries, &linker.link(&entries), &detector.detect(&entries));
        let b = scorer.score(&reversed, &linker.link(&reversed), &detector.detect(&reversed));
        prop_assert_eq!(a, b);
    }
}
