//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the ownership data model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("company not found: {0}")]
    PivotNotFound(String),

    #[error("cycle detected in ownership hierarchy at company: {0}")]
    CycleDetected(String),

    #[error("invalid record in {file} line {line}: {reason}")]
    InvalidRecord {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
