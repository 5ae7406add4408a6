use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::types::AccountId;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// The outcome of processing a single transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub account_id: AccountId,
    /// Clock reading taken when the transaction was processed.
    pub time: DateTime<Utc>,
    /// The amount after truncation.
    pub amount: i64
}

impl Report {
    /// Seconds since the Unix epoch, with microsecond precision.
    pub fn epoch_seconds(&self) -> f64 {
        self.time.timestamp_micros() as f64 / MICROS_PER_SECOND
    }
}

impl Display for Report {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Performed transaction for account {} at time: {} for amount: {}",
            self.account_id,
            self.epoch_seconds(),
            self.amount
        )
    }
}

/// Destination for processed transaction reports.
pub trait Reporter {
    fn report(&mut self, report: &Report) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        (**self).report(report)
    }
}

/// Writes each report as one line of text.
pub struct TextReporter<W: Write> {
    writer: W
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.writer, "{report}")?;
        self.writer.flush()
    }
}
