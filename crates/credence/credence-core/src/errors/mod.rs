//! Error handling for Credence.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod ingest_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use ingest_error::{IngestError, IngestReport};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CredenceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),
}

impl ErrorCode for CredenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
        }
    }
}

pub type CredenceResult<T> = Result<T, CredenceError>;
