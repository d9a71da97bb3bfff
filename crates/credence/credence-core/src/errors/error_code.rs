//! Stable error codes for callers that persist or display warnings.

/// Every error enum provides a structured code string.
pub trait ErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NEGATIVE_AMOUNT: &str = "NEGATIVE_AMOUNT";
pub const CONFIDENCE_OUT_OF_RANGE: &str = "CONFIDENCE_OUT_OF_RANGE";
pub const INVALID_TIMESTAMP: &str = "INVALID_TIMESTAMP";
pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
pub const AMOUNT_OUT_OF_RANGE: &str = "AMOUNT_OUT_OF_RANGE";
pub const UNKNOWN_EVENT_TYPE: &str = "UNKNOWN_EVENT_TYPE";
pub const DUPLICATE_ENTRY_ID: &str = "DUPLICATE_ENTRY_ID";
pub const MISSING_FIELD: &str = "MISSING_FIELD";
