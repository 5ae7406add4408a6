mod errors;
mod report;
mod transaction_processor;

#[cfg(test)]
pub use errors::ProcessError;
#[cfg(test)]
pub use report::Report;
pub use report::{Reporter, TextReporter};
pub use transaction_processor::TransactionProcessor;
