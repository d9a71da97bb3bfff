use credence_core::errors::{ConfigError, CredenceError, ErrorCode, IngestError, IngestReport};

#[test]
fn ingest_errors_carry_entry_id_and_code() {
    let err = IngestError::NegativeAmount {
        entry_id: "e7".to_string(),
        amount: "-3.00".to_string(),
    };
    assert_eq!(err.entry_id(), "e7");
    assert_eq!(err.error_code(), "NEGATIVE_AMOUNT");
    assert_eq!(err.coded_string(), "[NEGATIVE_AMOUNT] entry e7: negative amount -3.00");
}

#[test]
fn top_level_error_delegates_codes() {
    let err: CredenceError = ConfigError::FileNotFound {
        path: "credence.toml".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("credence.toml"));

    let err: CredenceError = IngestError::DuplicateId {
        entry_id: "e1".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "DUPLICATE_ENTRY_ID");
}

#[test]
fn ingest_report_counts_warnings() {
    let mut report: IngestReport<u32> = IngestReport::new();
    report.accept(1);
    assert!(report.is_clean());
    report.warn(IngestError::MissingField {
        entry_id: "e2".to_string(),
        field: "source_evidence_id",
    });
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.accepted, vec![1]);
}
