// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all AxAbsEnt failures.
///
/// Every variant is local and recoverable: it is returned by the call
/// whose precondition was violated and nothing is retried or corrected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxError {
    /// Dimension mismatch, non-square or non-symmetric signature,
    /// wrong entity count, unknown entity name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of an absent property key.
    #[error("not found: {0}")]
    NotFound(String),

    /// Well-formed input that is mathematically degenerate
    /// (e.g. normalizing a zero-norm tensor).
    #[error("degenerate operation: {0}")]
    DegenerateOperation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl AxError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type AxResult<T> = Result<T, AxError>;
