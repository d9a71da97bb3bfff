use credence_core::models::{Channel, LedgerEntry};
use credence_engine::FusionEngine;
use proptest::prelude::*;
use test_fixtures::entry;

const CHANNELS: [Channel; 4] = [Channel::Whatsapp, Channel::Tng, Channel::Grabfood, Channel::Bank];

fn arb_ledger() -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec(
        (0u32..300, 0u32..100, 0i64..90 * 24 * 60, 0usize..4, 0.0f64..=1.0),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (whole, cents, minutes, source, confidence))| {
                entry(&format!("e{i:03}"))
                    .amount(&format!("{whole}.{cents:02}"))
                    .at_minutes(minutes)
                    .channel(CHANNELS[source])
                    .source(&format!("ev-{source}"))
                    .confidence(confidence)
                    .build()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_bounded_and_additive(entries in arb_ledger()) {
        let report = FusionEngine::default().compute(&entries);
        let score = &report.score;
        prop_assert!(score.score <= 100);
        prop_assert!(score.breakdown.is_within_bounds());
        prop_assert_eq!(score.score, score.breakdown.total().round().clamp(0.0, 100.0) as u8);
    }

    #[test]
    fn output_is_permutation_independent(entries in arb_ledger(), rotate in 0usize..40) {
        let engine = FusionEngine::default();
        let mut permuted = entries.clone();
        permuted.reverse();
        if !permuted.is_empty() {
            let k = rotate % permuted.len();
            permuted.rotate_left(k);
        }
        let a = serde_json::to_string(&engine.compute(&entries)).unwrap();
        let b = serde_json::to_string(&engine.compute(&permuted)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn duplicate_ids_resolve_independently_of_order(
        entries in arb_ledger(),
        confidences in prop::collection::vec(0.0f64..=1.0, 2..5),
    ) {
        // Copies of one id that differ only in confidence.
        let mut ledger = entries;
        for confidence in confidences {
            ledger.push(
                entry("dup")
                    .amount("10.00")
                    .source("ev-0")
                    .confidence(confidence)
                    .build(),
            );
        }
        let engine = FusionEngine::default();
        let mut reversed = ledger.clone();
        reversed.reverse();
        let a = serde_json::to_string(&engine.compute(&ledger)).unwrap();
        let b = serde_json::to_string(&engine.compute(&reversed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
