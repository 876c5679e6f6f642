//! Error types for the RentDesk core

use thiserror::Error;

/// Main application error type
///
/// Persistence faults are propagated, never retried. Missing-record
/// lookups are not errors; they surface as `Option`/`bool` results on
/// the stores themselves.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
