use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing required argument: <{0}>")]
    MissingArgument(&'static str),
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Unexpected argument: '{0}'")]
    UnexpectedArgument(String)
}
