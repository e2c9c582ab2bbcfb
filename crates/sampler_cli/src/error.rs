//! CLI error types.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The core generator rejected the arguments or ran out of memory.
    #[error("generation failed: {0}")]
    Generate(#[from] sampler_core::GenerateError),

    /// An argument was syntactically valid but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed.
    #[error("serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),
}
