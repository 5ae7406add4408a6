mod cli;
mod engine;
mod processor;
mod providers;
mod types;

use std::io::{stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{parse_args, Command, USAGE};
use crate::engine::BatchEngine;
use crate::processor::{TextReporter, TransactionProcessor};
use crate::providers::{toward_zero, SystemClock};

fn main() -> Result<()> {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(command.log_level());

    let reporter = TextReporter::new(stdout().lock());
    let mut processor = TransactionProcessor::new(SystemClock, toward_zero, reporter);

    match command {
        Command::Single { account_id, amount, .. } => {
            processor.process(&account_id, amount)?;
        }
        Command::Batch { path, .. } => {
            let timer = Instant::now();
            let summary = BatchEngine::new(processor).run(&path)?;
            let duration = timer.elapsed();

            info!("Processed {} transactions, skipped {} in: {duration:?}", summary.processed, summary.skipped);
        }
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports go to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
