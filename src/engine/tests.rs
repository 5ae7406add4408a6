use super::{BatchEngine, BatchSummary};

use std::io::Write;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::processor::{TextReporter, TransactionProcessor};
use crate::providers::{toward_zero, Clock};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn epoch_clock() -> Result<FixedClock> {
    DateTime::from_timestamp(0, 0)
        .map(FixedClock)
        .ok_or_else(|| anyhow!("Epoch is not representable"))
}

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "account,amount")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn run_batch(file: &NamedTempFile) -> Result<(BatchSummary, Vec<String>)> {
    let path = file.path().to_str().ok_or_else(|| anyhow!("Temporary path is not UTF-8"))?;
    let mut buffer = Vec::new();

    let processor = TransactionProcessor::new(epoch_clock()?, toward_zero, TextReporter::new(&mut buffer));
    let summary = BatchEngine::new(processor).run(path)?;

    let lines = String::from_utf8(buffer)?.lines().map(str::to_string).collect();

    Ok((summary, lines))
}

#[test]
fn test_engine_processes_valid_csv_rows_in_order() -> Result<()> {
    let file = create_temporary_csv(&["1234,500", "acct, 19.99", "savings,-5.9"])?;

    let (summary, lines) = run_batch(&file)?;

    assert_eq!(summary, BatchSummary { processed: 3, skipped: 0 });
    assert_eq!(lines, vec![
        "Performed transaction for account 1234 at time: 0 for amount: 500",
        "Performed transaction for account acct at time: 0 for amount: 19",
        "Performed transaction for account savings at time: 0 for amount: -5",
    ]);

    Ok(())
}

#[test]
fn test_engine_gracefully_skips_malformed_csv_rows() -> Result<()> {
    let file = create_temporary_csv(&["acct,10.5", "acct,not-a-number", "acct", "acct,", "other,3"])?;

    let (summary, lines) = run_batch(&file)?;

    assert_eq!(summary, BatchSummary { processed: 2, skipped: 3 });
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("for amount: 10"));
    assert!(lines[1].ends_with("for amount: 3"));

    Ok(())
}

#[test]
fn test_engine_skips_rows_the_truncation_rejects() -> Result<()> {
    let file = create_temporary_csv(&["acct,79228162514264337593543950335", "acct,1.9"])?;

    let (summary, lines) = run_batch(&file)?;

    assert_eq!(summary, BatchSummary { processed: 1, skipped: 1 });
    assert_eq!(lines, vec!["Performed transaction for account acct at time: 0 for amount: 1"]);

    Ok(())
}

#[test]
fn test_engine_reports_missing_csv_file_as_error() -> Result<()> {
    let processor = TransactionProcessor::new(epoch_clock()?, toward_zero, TextReporter::new(Vec::new()));
    let mut engine = BatchEngine::new(processor);

    let result = engine.run("missing.csv");

    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_engine_handles_header_only_file() -> Result<()> {
    let file = create_temporary_csv(&[])?;

    let (summary, lines) = run_batch(&file)?;

    assert_eq!(summary, BatchSummary::default());
    assert!(lines.is_empty());

    Ok(())
}
