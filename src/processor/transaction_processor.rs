use tracing::debug;

use crate::processor::errors::ProcessError;
use crate::processor::report::{Report, Reporter};
use crate::providers::{Clock, TruncationError};
use crate::types::{AccountId, Amount};

/// Turns a raw transaction into a timestamped, truncated report.
///
/// Every capability the processor relies on is handed to it at construction:
/// the clock it reads the transaction time from, the function it truncates
/// amounts with, and the reporter it emits results through. Nothing is looked
/// up from global scope, so tests substitute any of the three directly.
pub struct TransactionProcessor<C, T, R> {
    clock: C,
    truncate: T,
    reporter: R
}

impl<C, T, R> TransactionProcessor<C, T, R>
where
    C: Clock,
    T: Fn(Amount) -> Result<i64, TruncationError>,
    R: Reporter
{
    pub fn new(clock: C, truncate: T, reporter: R) -> Self {
        Self {
            clock,
            truncate,
            reporter
        }
    }

    /// Processes a single transaction and emits its report.
    ///
    /// The clock is read once and the truncation function is called once with
    /// the untruncated amount. No validation happens here.
    ///
    /// # Errors
    /// Returns `ProcessError` only when a dependency fails:
    /// - The truncation function rejects the amount.
    /// - The reporter fails to write.
    pub fn process(&mut self, account_id: &AccountId, amount: Amount) -> Result<Report, ProcessError> {
        let time = self.clock.now();
        let truncated = (self.truncate)(amount)?;

        let report = Report {
            account_id: account_id.clone(),
            time,
            amount: truncated
        };

        self.reporter.report(&report)?;

        debug!("Transaction for account [{account_id}] processed: [{amount}] -> [{truncated}]");

        Ok(report)
    }
}
