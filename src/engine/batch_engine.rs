use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use tracing::{error, warn};

use crate::engine::TransactionRequest;
use crate::processor::{Reporter, TransactionProcessor};
use crate::providers::{Clock, TruncationError};
use crate::types::Amount;

/// Counts of rows handled during a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize
}

/// Feeds every row of a CSV file through a single transaction processor, in file order.
pub struct BatchEngine<C, T, R> {
    processor: TransactionProcessor<C, T, R>
}

impl<C, T, R> BatchEngine<C, T, R>
where
    C: Clock,
    T: Fn(Amount) -> Result<i64, TruncationError>,
    R: Reporter
{
    pub fn new(processor: TransactionProcessor<C, T, R>) -> Self {
        Self { processor }
    }

    /// Processes every transaction in the CSV file at `path`.
    ///
    /// Rows that cannot be deserialized or processed are logged and skipped,
    /// only failing to open the file is an error.
    pub fn run(&mut self, path: &str) -> anyhow::Result<BatchSummary> {
        let file = File::open(path)
            .with_context(|| format!("Error opening CSV at path: {path}"))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut summary = BatchSummary::default();

        for result in reader.deserialize::<TransactionRequest>() {
            let request = match result {
                Ok(request) => request,
                Err(error) => {
                    error!("CSV deserialization error: {error}");
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.processor.process(&request.account_id, request.amount) {
                Ok(_) => summary.processed += 1,
                Err(error) => {
                    warn!("Transaction for account [{}] was not processed: {error}", request.account_id);
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }
}
