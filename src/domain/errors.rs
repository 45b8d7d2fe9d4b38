//! Domain errors for the issue roulette run.

use thiserror::Error;

/// Errors that can occur while fetching, partitioning or writing issues.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
