mod args;
mod errors;

pub use args::{parse_args, Command, USAGE};
#[cfg(test)]
pub use errors::CliError;
