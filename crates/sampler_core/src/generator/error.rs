//! Generator error types.
//!
//! Every failure is reported synchronously during the serial setup
//! phase, before any parallel work is dispatched, and is a
//! deterministic function of the arguments: retrying with identical
//! arguments cannot succeed.

use thiserror::Error;

use super::config::MAX_WORKERS;

/// Errors that can occur when configuring or running a generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Draw count below zero at the signed boundary.
    #[error("draw count {0} is negative")]
    NegativeDrawCount(i64),

    /// Worker count outside [1, MAX_WORKERS].
    #[error("worker count {0} is outside the valid range [1, {max}]", max = MAX_WORKERS)]
    InvalidWorkerCount(i64),

    /// Missing required field in builder.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Output buffer reservation failed.
    #[error("failed to allocate an output buffer for {requested} draws")]
    AllocationFailed {
        /// Number of draws the buffer was sized for.
        requested: usize,
    },
}
