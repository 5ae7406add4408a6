use rust_decimal::prelude::ToPrimitive;

use crate::providers::errors::TruncationError;
use crate::types::Amount;

/// Drops the fractional part of `amount`, rounding toward zero.
///
/// `5.9` becomes `5` and `-5.9` becomes `-5`.
pub fn toward_zero(amount: Amount) -> Result<i64, TruncationError> {
    amount.value().trunc().to_i64()
        .ok_or(TruncationError::OutOfRange(amount))
}
