//! Serialization and invariant tests for the core value objects.

use chrono::{TimeZone, Utc};
use credence_core::models::*;
use rust_decimal::Decimal;
use serde_json::json;

fn entry(id: &str, confidence: f64, amount: Decimal) -> LedgerEntry {
    LedgerEntry {
        id: id.to_string(),
        business_id: "biz-1".to_string(),
        event_time: Utc.with_ymd_and_hms(2024, 5, 6, 10, 30, 0).unwrap(),
        amount,
        currency: "MYR".to_string(),
        channel: Channel::Whatsapp,
        event_type: EventType::Payment,
        source_evidence_id: "ev-1".to_string(),
        confidence,
        attributes: EntryAttributes::default(),
    }
}

#[test]
fn channel_and_event_type_parse_case_insensitively() {
    assert_eq!(Channel::parse("WhatsApp"), Some(Channel::Whatsapp));
    assert_eq!(Channel::parse(" tng "), Some(Channel::Tng));
    assert_eq!(Channel::parse("telegram"), None);
    assert_eq!(EventType::parse("PAYOUT"), Some(EventType::Payout));
    assert_eq!(EventType::parse("transfer"), None);
}

#[test]
fn enums_serialize_as_snake_case_strings() {
    assert_eq!(serde_json::to_value(Channel::Grabfood).unwrap(), json!("grabfood"));
    assert_eq!(serde_json::to_value(LinkType::AmountMatch).unwrap(), json!("amount_match"));
    assert_eq!(serde_json::to_value(FlagKind::MissingPeriod).unwrap(), json!("missing_period"));
    for kind in FlagKind::ALL {
        assert_eq!(FlagKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(FlagKind::from_name("round_numbers_suspicious"), None);
    assert_eq!(serde_json::to_value(ConfidenceLevel::Medium).unwrap(), json!("MEDIUM"));
    assert_eq!(serde_json::to_value(InsightType::PeakDay).unwrap(), json!("peak_day"));
}

#[test]
fn link_type_ordering_ranks_strength() {
    assert!(LinkType::AmountMatch > LinkType::TimeMatch);
    assert!(LinkType::TimeMatch > LinkType::KeywordMatch);
    assert!(LinkType::KeywordMatch > LinkType::CrossChannel);
}

#[test]
fn event_link_endpoints_are_canonical() {
    let link = EventLink::new("zeta", "alpha", LinkType::TimeMatch, 0.7);
    assert_eq!(link.entry_a_id, "alpha");
    assert_eq!(link.entry_b_id, "zeta");
    assert_eq!(link.pair_key(), PairKey::new("alpha", "zeta"));
    assert_eq!(PairKey::new("b", "a"), PairKey::new("a", "b"));
    assert!(PairKey::new("a", "a").is_reflexive());
}

#[test]
fn entry_check_rejects_out_of_range_values() {
    assert!(entry("e1", 0.9, Decimal::new(2400, 2)).check().is_ok());
    assert!(entry("e1", 1.0, Decimal::ZERO).check().is_ok());
    assert!(entry("e1", 1.2, Decimal::new(2400, 2)).check().is_err());
    assert!(entry("e1", f64::NAN, Decimal::new(2400, 2)).check().is_err());
    assert!(entry("e1", 0.5, Decimal::new(-100, 2)).check().is_err());
    assert!(entry(" ", 0.5, Decimal::new(100, 2)).check().is_err());
}

#[test]
fn entry_check_enforces_amount_ceiling() {
    use credence_core::constants::MAX_ENTRY_AMOUNT;
    use credence_core::errors::{ErrorCode, IngestError};

    assert_eq!(MAX_ENTRY_AMOUNT, Decimal::new(1_000_000_000_000, 0));
    assert!(entry("e1", 0.5, MAX_ENTRY_AMOUNT).check().is_ok());

    let huge = Decimal::MAX / Decimal::TWO + Decimal::ONE;
    let err = entry("e1", 0.5, huge).check().unwrap_err();
    assert!(matches!(err, IngestError::AmountOutOfRange { .. }));
    assert_eq!(err.error_code(), "AMOUNT_OUT_OF_RANGE");
}

#[test]
fn canonical_order_is_total() {
    use std::cmp::Ordering;

    let low = entry("x", 0.2, Decimal::new(1000, 2));
    let high = entry("x", 1.0, Decimal::new(1000, 2));
    assert_eq!(low.canonical_cmp(&high), Ordering::Less);
    assert_eq!(high.canonical_cmp(&low), Ordering::Greater);
    assert_eq!(low.canonical_cmp(&low.clone()), Ordering::Equal);

    // 10.0 and 10.00 are numerically equal but serialize differently.
    let rescaled = entry("x", 0.2, Decimal::new(100, 1));
    assert_ne!(low.canonical_cmp(&rescaled), Ordering::Equal);

    let mut tagged = low.clone();
    tagged.attributes.extra.insert("sender".to_string(), json!("Aminah"));
    assert_ne!(low.canonical_cmp(&tagged), Ordering::Equal);
}

#[test]
fn ledger_entry_json_round_trip() {
    let mut e = entry("e1", 0.85, Decimal::new(2400, 2));
    e.attributes = EntryAttributes::from_map(
        EventType::Payment,
        json!({"sender": "Aminah", "manual_entry": false}).as_object().cloned().unwrap(),
    );
    let text = serde_json::to_string(&e).unwrap();
    let back: LedgerEntry = serde_json::from_str(&text).unwrap();
    assert_eq!(back, e);
    assert_eq!(back.amount.to_string(), "24.00");
}

#[test]
fn total_penalty_is_clamped() {
    let flags = vec![
        AnomalyFlag::new(FlagKind::SpikeDetected, 8.0, "spike"),
        AnomalyFlag::new(FlagKind::DuplicateUpload, 10.0, "dupes"),
        AnomalyFlag::new(FlagKind::RoundNumberPattern, 2.0, "round"),
        AnomalyFlag::new(FlagKind::UniformIntervals, 2.0, "uniform"),
    ];
    assert_eq!(AnomalyFlag::total_penalty(&flags), -20.0);
    assert_eq!(AnomalyFlag::total_penalty(&[]), 0.0);
    let informational = [AnomalyFlag::new(FlagKind::MissingPeriod, 0.0, "gap")];
    assert_eq!(AnomalyFlag::total_penalty(&informational), 0.0);
}

#[test]
fn breakdown_normalization_enforces_bounds() {
    let raw = ScoreBreakdown {
        activity: 41.0,
        consistency: -3.0,
        longevity: 12.3456,
        evidence_strength: f64::NAN,
        cross_source: 15.0,
        penalties: -35.0,
    };
    let b = raw.normalized();
    assert_eq!(b.activity, 30.0);
    assert_eq!(b.consistency, 0.0);
    assert_eq!(b.longevity, 12.35);
    assert_eq!(b.evidence_strength, 0.0);
    assert_eq!(b.penalties, -20.0);
    assert!(b.is_within_bounds());
    assert_eq!(b.final_score(), 37);
}

#[test]
fn credibility_score_round_trip() {
    let score = CredibilityScore {
        score: 57,
        confidence_level: ConfidenceLevel::Medium,
        breakdown: ScoreBreakdown {
            activity: 21.5,
            consistency: 13.07,
            longevity: 6.33,
            evidence_strength: 21.25,
            cross_source: 3.0,
            penalties: -8.0,
        },
        flags: vec!["spike_detected".to_string()],
        insights: vec![InsightCard::new(InsightType::Coverage, "Evidence from 2 channels", "ok")
            .with_data(json!({"channels": ["tng", "whatsapp"]}))],
        computed_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    };
    let text = serde_json::to_string(&score).unwrap();
    let back: CredibilityScore = serde_json::from_str(&text).unwrap();
    assert_eq!(back, score);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["confidence_level"], json!("MEDIUM"));
    assert_eq!(value["insights"][0]["type"], json!("coverage"));
}
