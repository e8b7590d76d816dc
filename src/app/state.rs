//! Application state definitions
//!
//! `ConverterState` is the session-scoped state of the converter screen. It
//! owns the conversion history, so dropping the state discards the history.

use crate::config_file::ConverterConfig;
use crate::converter::{self, ConversionError};
use crate::history::History;
use crate::types::Unit;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Focusable controls on the converter screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Value,
    From,
    To,
    Convert,
}

impl Field {
    /// Next control in tab order (wraps)
    pub fn next(self) -> Self {
        match self {
            Self::Value => Self::From,
            Self::From => Self::To,
            Self::To => Self::Convert,
            Self::Convert => Self::Value,
        }
    }

    /// Previous control in tab order (wraps)
    pub fn previous(self) -> Self {
        match self {
            Self::Value => Self::Convert,
            Self::From => Self::Value,
            Self::To => Self::From,
            Self::Convert => Self::To,
        }
    }
}

/// What the screen is currently showing on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Converter form and history
    Converter,
    /// Warning dialog covering the form
    WarningDialog,
    /// Help overlay
    Help,
}

/// Modal warning notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningDialog {
    pub title: String,
    pub message: String,
}

impl WarningDialog {
    /// Warning raised for input that cannot be converted
    pub fn invalid_number() -> Self {
        Self {
            title: "Warning".to_string(),
            message: converter::INVALID_NUMBER_MESSAGE.to_string(),
        }
    }
}

/// Session state for the converter screen
#[derive(Debug, Clone)]
pub struct ConverterState {
    /// Raw text typed into the value field
    pub input: String,
    /// Selected source unit
    pub from_unit: Unit,
    /// Selected target unit
    pub to_unit: Unit,
    /// Display line of the last successful conversion
    pub result: Option<String>,
    /// Conversions performed during this session
    pub history: History,
    /// Focused control
    pub focus: Field,
    /// Open warning dialog, if any
    pub warning: Option<WarningDialog>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// First history row shown
    pub history_scroll: usize,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl ConverterState {
    /// Create a fresh session using the configured start-up units
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            input: String::new(),
            from_unit: config.default_from,
            to_unit: config.default_to,
            result: None,
            history: History::new(),
            focus: Field::Value,
            warning: None,
            help_visible: false,
            history_scroll: 0,
            status_message: "Enter a value and press Enter to convert".to_string(),
        }
    }

    /// Current overlay mode
    pub fn mode(&self) -> AppMode {
        if self.warning.is_some() {
            AppMode::WarningDialog
        } else if self.help_visible {
            AppMode::Help
        } else {
            AppMode::Converter
        }
    }

    /// Parse, convert, format and record the current input.
    ///
    /// On success the result line is replaced and exactly one record is
    /// appended. On failure the warning dialog opens and neither the result
    /// nor the history changes.
    pub fn perform_conversion(&mut self) -> Result<(), ConversionError> {
        match converter::convert(&self.input, self.from_unit, self.to_unit) {
            Ok(outcome) => {
                info!(
                    "Converted {:?} {} -> {} = {}",
                    self.input, self.from_unit, self.to_unit, outcome.formatted
                );
                self.result = Some(outcome.display);
                self.history.append(outcome.record);
                self.status_message = format!("{} conversion(s) this session", self.history.len());
                Ok(())
            }
            Err(e) => {
                warn!("Rejected conversion input {:?}: {}", self.input, e);
                self.warning = Some(WarningDialog::invalid_number());
                Err(e)
            }
        }
    }

    /// Close the warning dialog
    pub fn dismiss_warning(&mut self) {
        if self.warning.take().is_some() {
            debug!("Warning dialog dismissed");
        }
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append a character to the value field if it is focused
    pub fn push_char(&mut self, c: char) {
        if self.focus == Field::Value {
            self.input.push(c);
        }
    }

    /// Remove the last character of the value field if it is focused
    pub fn pop_char(&mut self) {
        if self.focus == Field::Value {
            self.input.pop();
        }
    }

    /// Select the next unit on the focused selector
    pub fn cycle_unit_forward(&mut self) {
        self.cycle_unit(1);
    }

    /// Select the previous unit on the focused selector
    pub fn cycle_unit_backward(&mut self) {
        self.cycle_unit(-1);
    }

    fn cycle_unit(&mut self, step: isize) {
        let slot = match self.focus {
            Field::From => &mut self.from_unit,
            Field::To => &mut self.to_unit,
            Field::Value | Field::Convert => return,
        };
        *slot = step_unit(*slot, step);
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_scroll + 1 < self.history.len() {
            self.history_scroll += 1;
        }
    }
}

/// Move `step` positions through the unit list, wrapping at both ends
fn step_unit(current: Unit, step: isize) -> Unit {
    let units: Vec<Unit> = Unit::iter().collect();
    let len = units.len() as isize;
    let idx = units.iter().position(|u| *u == current).unwrap_or(0) as isize;
    units[(idx + step).rem_euclid(len) as usize]
}
