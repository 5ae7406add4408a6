use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A raw monetary quantity as supplied by the caller, fraction included.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (is_negative, unsigned) = split_sign(value);

        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent).ok_or_else(|| not_a_number(value))?),
            None => (unsigned, 0)
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
            return Err(not_a_number(value));
        }

        let digits = format!("{integer}{fraction}");
        let significant = digits.trim_start_matches('0');

        if significant.is_empty() {
            return Ok(Amount(Decimal::ZERO));
        }

        // Position of the decimal point relative to the first significant digit.
        let point = (integer.len() as i64)
            .saturating_sub((digits.len() - significant.len()) as i64)
            .saturating_add(exponent);

        if point > MAX_INTEGER_DIGITS {
            return Err(AmountError::OutOfRange(value.to_string()));
        }

        if point < -MAX_SCALE {
            return Ok(Amount(Decimal::ZERO));
        }

        let (integer, fraction) = shift_point(significant, point);

        //NOTE: Digits past what Decimal can hold are cut, never rounded, so the integer part is left untouched
        let kept = MAX_SCALE.saturating_sub(integer.len() as i64).max(0) as usize;
        let fraction = &fraction[..fraction.len().min(kept)];

        let sign = if is_negative { "-" } else { "" };
        let integer = if integer.is_empty() { "0" } else { integer.as_str() };
        let normalized = if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        };

        Decimal::from_str_exact(&normalized)
            .map(Amount)
            .map_err(|_| AmountError::OutOfRange(value.to_string()))
    }
}

const MAX_SCALE: i64 = 28;
const MAX_INTEGER_DIGITS: i64 = 29;

fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value))
    }
}

fn parse_exponent(exponent: &str) -> Option<i64> {
    let (is_negative, digits) = split_sign(exponent);

    if digits.is_empty() || !is_digits(digits) {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);

    Some(if is_negative { -magnitude } else { magnitude })
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Splits `digits` into integer and fraction parts with the point `point` places from the left.
/// `point` must lie within `-MAX_SCALE..=MAX_INTEGER_DIGITS`.
fn shift_point(digits: &str, point: i64) -> (String, String) {
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        return (String::new(), format!("{zeros}{digits}"));
    }

    let point = point as usize;

    if point >= digits.len() {
        let zeros = "0".repeat(point - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        (digits[..point].to_string(), digits[point..].to_string())
    }
}

fn not_a_number(value: &str) -> AmountError {
    AmountError::InvalidFormat(format!("Value '{value}' is not a number"))
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
