//! Tests for the conversion engine and session history
//!
//! These tests verify:
//! - The documented example conversions
//! - Invalid input handling and its (lack of) side effects
//! - History ordering through the session state

use lengthtui::app::{AppMode, ConverterState, Field, WarningDialog};
use lengthtui::converter::{self, ConversionError};
use lengthtui::history::History;
use lengthtui::types::Unit;
use lengthtui::ConverterConfig;

// =============================================================================
// Conversion Engine Tests
// =============================================================================

#[test]
fn test_metre_to_millimetre_display() {
    let outcome = converter::convert("1", Unit::Metre, Unit::Millimetre).unwrap();
    assert_eq!(outcome.formatted, "1000");
    assert_eq!(outcome.display, "1 m (Metre) = 1000 mm (Millimetre)");
}

#[test]
fn test_mile_to_foot_is_close_to_5280() {
    let outcome = converter::convert("1", Unit::Mile, Unit::Foot).unwrap();
    let shown: f64 = outcome.formatted.parse().unwrap();
    assert!((shown - 5280.0).abs() < 0.01, "got {}", shown);
    assert_eq!(outcome.formatted, "5280.002");
}

#[test]
fn test_foot_to_metre() {
    let outcome = converter::convert("10", Unit::Foot, Unit::Metre).unwrap();
    assert_eq!(outcome.formatted, "3.048");
    assert_eq!(outcome.display, "10 ft (Foot) = 3.048 m (Metre)");
}

#[test]
fn test_millimetre_to_mile_rounds_small_values() {
    let outcome = converter::convert("1", Unit::Millimetre, Unit::Mile).unwrap();
    assert_eq!(outcome.formatted, "0");
    assert!(outcome.value > 0.0);
}

#[test]
fn test_trailing_zeros_stripped() {
    assert_eq!(converter::format_result(5.0), "5");
    assert_eq!(converter::format_result(5.250), "5.25");
    let outcome = converter::convert("5000", Unit::Millimetre, Unit::Metre).unwrap();
    assert_eq!(outcome.formatted, "5");
}

#[test]
fn test_abc_is_invalid_number() {
    let err = converter::convert("abc", Unit::Metre, Unit::Foot).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidNumber { ref input } if input == "abc"));
    assert_eq!(err.to_string(), converter::INVALID_NUMBER_MESSAGE);
}

#[test]
fn test_every_unit_pair_converts() {
    use strum::IntoEnumIterator;
    for from in Unit::iter() {
        for to in Unit::iter() {
            let outcome = converter::convert("2", from, to).unwrap();
            assert!(outcome.display.starts_with(&format!("2 {} = ", from.label())));
            assert!(outcome.display.ends_with(&to.label()));
        }
    }
}

// =============================================================================
// Session / History Tests
// =============================================================================

#[test]
fn test_invalid_input_adds_no_history() {
    let mut state = ConverterState::default();
    state.input = "abc".to_string();
    state.to_unit = Unit::Foot;

    assert!(state.perform_conversion().is_err());
    assert!(state.history.is_empty());
    assert!(state.result.is_none());
    assert_eq!(state.warning, Some(WarningDialog::invalid_number()));
    assert_eq!(state.mode(), AppMode::WarningDialog);
}

#[test]
fn test_warning_text() {
    let dialog = WarningDialog::invalid_number();
    assert_eq!(dialog.title, "Warning");
    assert_eq!(dialog.message, "Please Enter a valid number");
}

#[test]
fn test_failed_attempt_keeps_previous_result() {
    let mut state = ConverterState::default();
    state.input = "2".to_string();
    state.perform_conversion().unwrap();

    state.input = "two".to_string();
    assert!(state.perform_conversion().is_err());

    assert_eq!(
        state.result.as_deref(),
        Some("2 m (Metre) = 2000 mm (Millimetre)")
    );
    assert_eq!(state.history.len(), 1);

    state.dismiss_warning();
    assert_eq!(state.mode(), AppMode::Converter);
}

#[test]
fn test_history_in_call_order() {
    let mut state = ConverterState::default();
    let inputs = [("1", Unit::Metre, Unit::Millimetre), ("3", Unit::Foot, Unit::Metre), ("1", Unit::Mile, Unit::Foot)];

    for (value, from, to) in inputs {
        state.input = value.to_string();
        state.from_unit = from;
        state.to_unit = to;
        state.perform_conversion().unwrap();
    }

    let lines: Vec<String> = state.history.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "1 m (Metre) = 1000 mm (Millimetre)",
            "3 ft (Foot) = 0.914 m (Metre)",
            "1 mi (Mile) = 5280.002 ft (Foot)",
        ]
    );
}

#[test]
fn test_history_record_fields() {
    let mut state = ConverterState::default();
    state.input = "1.5".to_string();
    state.perform_conversion().unwrap();

    let record = state.history.latest().unwrap();
    assert_eq!(record.value(), "1.5");
    assert_eq!(record.from_unit(), "m (Metre)");
    assert_eq!(record.to_unit(), "mm (Millimetre)");
    assert_eq!(record.result(), "1500");
}

#[test]
fn test_empty_history_message() {
    assert_eq!(History::EMPTY_MESSAGE, "No history available");
    let lines = lengthtui::ui::screens::history_lines(&History::new());
    assert_eq!(lines, vec!["No history available".to_string()]);
}

// =============================================================================
// Session Defaults Tests
// =============================================================================

#[test]
fn test_default_session() {
    let state = ConverterState::default();
    assert!(state.input.is_empty());
    assert_eq!(state.from_unit, Unit::Metre);
    assert_eq!(state.to_unit, Unit::Millimetre);
    assert_eq!(state.focus, Field::Value);
    assert!(state.result.is_none());
    assert!(state.warning.is_none());
    assert!(!state.help_visible);
}

#[test]
fn test_session_uses_configured_units() {
    let config = ConverterConfig {
        default_from: Unit::Mile,
        default_to: Unit::Foot,
    };
    let state = ConverterState::new(&config);
    assert_eq!(state.from_unit, Unit::Mile);
    assert_eq!(state.to_unit, Unit::Foot);
}

#[test]
fn test_typing_only_into_value_field() {
    let mut state = ConverterState::default();
    state.push_char('4');
    state.focus_next();
    state.push_char('2');
    state.pop_char();
    assert_eq!(state.input, "4");
    assert_eq!(state.focus, Field::From);
}
