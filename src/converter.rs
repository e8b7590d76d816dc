//! Conversion engine
//!
//! Pure conversion between any two [`Unit`]s by normalizing through the base
//! unit (metre): divide by the source factor, multiply by the target factor.
//! Nothing here touches history; callers record successful outcomes.
//!
//! # Rounding
//!
//! Results are rounded to 3 decimal places for display only. The
//! full-precision value is kept on [`ConversionOutcome::value`].

use crate::history::ConversionRecord;
use crate::types::Unit;
use thiserror::Error;

/// Number of decimal places kept in formatted results
pub const DISPLAY_PRECISION: usize = 3;

/// Message shown to the user when the input is not a usable number
pub const INVALID_NUMBER_MESSAGE: &str = "Please Enter a valid number";

/// Conversion failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input was empty, not a decimal literal, or not finite
    #[error("Please Enter a valid number")]
    InvalidNumber { input: String },
}

/// Successful conversion result
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    /// Full-precision converted value
    pub value: f64,
    /// Result rounded to 3 decimals with trailing zeros stripped
    pub formatted: String,
    /// Full line, e.g. "1 m (Metre) = 1000 mm (Millimetre)"
    pub display: String,
    /// Record to append to the session history
    pub record: ConversionRecord,
}

/// Convert `raw_value` from one unit to another.
///
/// `raw_value` is trimmed before parsing but kept verbatim in the display
/// string and the history record.
pub fn convert(raw_value: &str, from: Unit, to: Unit) -> Result<ConversionOutcome, ConversionError> {
    let numeric = parse_value(raw_value)?;

    let value = convert_value(numeric, from, to);
    if !value.is_finite() {
        return Err(invalid(raw_value));
    }

    let formatted = format_result(value);
    let from_label = from.label();
    let to_label = to.label();
    let display = format!("{} {} = {} {}", raw_value, from_label, formatted, to_label);

    Ok(ConversionOutcome {
        value,
        record: ConversionRecord::new(raw_value, from_label, to_label, formatted.clone()),
        formatted,
        display,
    })
}

/// Convert an already-parsed quantity without any rounding
pub fn convert_value(value: f64, from: Unit, to: Unit) -> f64 {
    let metres = value / from.factor();
    metres * to.factor()
}

/// Round to [`DISPLAY_PRECISION`] decimals, then drop trailing zeros and a
/// dangling decimal point.
pub fn format_result(value: f64) -> String {
    let fixed = format!("{:.*}", DISPLAY_PRECISION, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // "-0.000" collapses to "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_value(raw_value: &str) -> Result<f64, ConversionError> {
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return Err(invalid(raw_value));
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(raw_value)),
    }
}

fn invalid(raw_value: &str) -> ConversionError {
    ConversionError::InvalidNumber {
        input: raw_value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metre_to_millimetre() {
        let outcome = convert("1", Unit::Metre, Unit::Millimetre).unwrap();
        assert_eq!(outcome.formatted, "1000");
        assert_eq!(outcome.display, "1 m (Metre) = 1000 mm (Millimetre)");
    }

    #[test]
    fn test_mile_to_foot() {
        let outcome = convert("1", Unit::Mile, Unit::Foot).unwrap();
        assert_eq!(outcome.formatted, "5280.002");
        assert!((outcome.value - 5280.0).abs() < 0.01);
    }

    #[test]
    fn test_record_matches_outcome() {
        let outcome = convert("2.5", Unit::Foot, Unit::Metre).unwrap();
        assert_eq!(outcome.record.value(), "2.5");
        assert_eq!(outcome.record.from_unit(), "ft (Foot)");
        assert_eq!(outcome.record.to_unit(), "m (Metre)");
        assert_eq!(outcome.record.result(), outcome.formatted);
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["abc", "", "   ", "1.2.3", "inf", "-infinity", "NaN", "12abc"] {
            let err = convert(input, Unit::Metre, Unit::Foot).unwrap_err();
            assert_eq!(
                err,
                ConversionError::InvalidNumber {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_overflowing_result_is_invalid() {
        let err = convert("1e308", Unit::Metre, Unit::Millimetre).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidNumber { .. }));
    }

    #[test]
    fn test_error_message() {
        let err = convert("abc", Unit::Metre, Unit::Foot).unwrap_err();
        assert_eq!(err.to_string(), INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_raw_value_kept_verbatim() {
        let outcome = convert(" 1 ", Unit::Metre, Unit::Metre).unwrap();
        assert_eq!(outcome.display, " 1  m (Metre) = 1 m (Metre)");
        assert_eq!(outcome.record.value(), " 1 ");
    }

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(5.25), "5.25");
        assert_eq!(format_result(5.2), "5.2");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(1000.0), "1000");
    }

    #[test]
    fn test_format_rounds_to_three_places() {
        assert_eq!(format_result(1.23456), "1.235");
        assert_eq!(format_result(0.0004), "0");
        assert_eq!(format_result(-0.0004), "0");
        assert_eq!(format_result(-2.5), "-2.5");
    }

    #[test]
    fn test_negative_and_exponent_inputs() {
        let outcome = convert("-2", Unit::Metre, Unit::Millimetre).unwrap();
        assert_eq!(outcome.formatted, "-2000");

        let outcome = convert("1e3", Unit::Millimetre, Unit::Metre).unwrap();
        assert_eq!(outcome.formatted, "1");
    }
}
