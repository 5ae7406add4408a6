use thiserror::Error;

use crate::types::Amount;

#[derive(Debug, Error)]
pub enum TruncationError {
    #[error("Truncation error: amount [{0}] does not fit in a 64-bit integer")]
    OutOfRange(Amount)
}
