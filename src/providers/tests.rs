use super::{toward_zero, Clock, SystemClock, TruncationError};
use anyhow::Result;
use chrono::{TimeDelta, Utc};
use std::str::FromStr;

use crate::types::Amount;

#[test]
fn test_toward_zero_drops_fraction_without_rounding() -> Result<()> {
    let test_cases = vec![
        ("5.9", 5),
        ("-5.9", -5),
        ("0", 0),
        ("-0.5", 0),
        ("19.99", 19),
        ("500", 500),
        ("0.9999", 0),
        ("-1", -1),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(toward_zero(Amount::from_str(input_string)?)?, expected_output, "input: {input_string}");
    }

    Ok(())
}

#[test]
fn test_toward_zero_never_rounds_values_at_the_precision_limit() -> Result<()> {
    let test_cases = vec![
        ("0.99999999999999999999999999999999", 0),
        ("-0.99999999999999999999999999999999", 0),
        ("-5.99999999999999999999999999999999", -5),
        ("5.99999999999999999999999999999999", 5),
        ("1e-30", 0),
        ("-1e-29", 0),
        ("9.99999999999999999999e0", 9),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(toward_zero(Amount::from_str(input_string)?)?, expected_output, "input: {input_string}");
    }

    Ok(())
}

#[test]
fn test_toward_zero_accepts_the_largest_i64() -> Result<()> {
    assert_eq!(toward_zero(Amount::from_str("9223372036854775807.9")?)?, i64::MAX);

    Ok(())
}

#[test]
fn test_toward_zero_rejects_amounts_outside_i64() -> Result<()> {
    let amount = Amount::from_str("79228162514264337593543950335")?;
    let result = toward_zero(amount);

    assert!(matches!(result, Err(TruncationError::OutOfRange(value)) if value == amount));

    Ok(())
}

#[test]
fn test_system_clock_reads_wall_clock_time() {
    let before = Utc::now();
    let now = SystemClock.now();
    let after = Utc::now();

    assert!(before <= now && now <= after);
}

#[test]
fn test_clock_reference_delegates_to_inner_clock() {
    let clock = SystemClock;
    let now = (&clock).now();

    assert!(Utc::now() - now < TimeDelta::seconds(5));
}
