use std::io;

use thiserror::Error;

use crate::providers::TruncationError;

/// Failures raised by a processor's dependencies, passed through untouched.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Truncation(#[from] TruncationError),
    #[error("Failed to emit transaction report: {0}")]
    Report(#[from] io::Error)
}
