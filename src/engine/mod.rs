mod batch_engine;
#[cfg(test)]
mod tests;

use serde::Deserialize;

use crate::types::{AccountId, Amount};

pub use batch_engine::BatchEngine;
#[cfg(test)]
pub use batch_engine::BatchSummary;

/// Represents a single row from the input CSV file.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "account")]
    pub account_id: AccountId,
    pub amount: Amount
}
