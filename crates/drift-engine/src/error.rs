//! Error types for drift-engine operations.

use thiserror::Error;

/// Every variant is a caller-side usage error detected before any
/// computation runs; the engine has no transient failure modes and never
/// coerces a bad input into something runnable (a negative offset count is
/// an error, not a subtraction).
#[derive(Error, Debug)]
pub enum DriftError {
    /// A value was not the expected date/date-time variant, or a pair of
    /// bounds mixed date-only and date-time values.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A negative offset count, a zero bucket count, or an otherwise
    /// out-of-domain argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A time-of-day offset applied to a date-only value.
    #[error("Unsupported combination: {0}")]
    UnsupportedCombination(String),

    /// `start > end` passed to an operation that requires ordered bounds.
    #[error("Ordering violation: {0}")]
    OrderingViolation(String),
}

pub type Result<T> = std::result::Result<T, DriftError>;
