mod clock;
mod errors;
#[cfg(test)]
mod tests;
mod truncation;

pub use clock::{Clock, SystemClock};
pub use errors::TruncationError;
pub use truncation::toward_zero;
