use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::cli::errors::CliError;
use crate::types::{AccountId, Amount};

pub const USAGE: &str = "\
Usage: transaction-processor [account_id] [amount] [log_level:optional]
       transaction-processor --file [input].csv [log_level:optional]
Available log levels: error, warn, info, debug, trace (default: error)";

const FILE_FLAG: &str = "--file";

#[derive(Debug, PartialEq)]
pub enum Command {
    Single {
        account_id: AccountId,
        amount: Amount,
        log_level: LevelFilter
    },
    Batch {
        path: String,
        log_level: LevelFilter
    }
}

impl Command {
    pub fn log_level(&self) -> LevelFilter {
        match self {
            Command::Single { log_level, .. } | Command::Batch { log_level, .. } => *log_level
        }
    }
}

/// Maps the process arguments, program name excluded, to a `Command`.
///
/// Required arguments are never defaulted; a missing one is an error.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>
{
    let mut args = args.into_iter();

    let first = args.next().ok_or(CliError::MissingArgument("account_id"))?;

    let command = if first == FILE_FLAG {
        let path = args.next().ok_or(CliError::MissingArgument("input.csv"))?;

        Command::Batch {
            path,
            log_level: parse_optional_log_level(args.next())
        }
    } else {
        let amount = args.next().ok_or(CliError::MissingArgument("amount"))?;

        Command::Single {
            account_id: AccountId::new(first),
            amount: Amount::from_str(&amount)?,
            log_level: parse_optional_log_level(args.next())
        }
    };

    if let Some(extra) = args.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }

    Ok(command)
}

fn parse_optional_log_level(level: Option<String>) -> LevelFilter {
    level.map(|s| parse_log_level(&s)).unwrap_or(LevelFilter::ERROR)
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
