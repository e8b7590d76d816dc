//! Input handling module
//!
//! Translates key events into changes on the converter session. Text typed
//! while the value field is focused goes into the field; everything else is
//! resolved through the [`KeybindingContext`].

use crate::app::{AppMode, ConverterState, Field};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// What the event loop should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the application
    Quit,
}

/// Routes key events to the session state
pub struct InputHandler {
    keybindings: KeybindingContext,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self {
            keybindings: KeybindingContext::new(),
        }
    }

    /// Keybinding registry used for resolution (shared with the nav bar)
    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybindings
    }

    /// Handle one key press
    pub fn handle_key(&self, state: &mut ConverterState, key: KeyEvent) -> InputResult {
        let mode = state.mode();

        if mode == AppMode::Converter && state.focus == Field::Value {
            if let Some(handled) = Self::handle_text_entry(state, &key) {
                return handled;
            }
        }

        let Some(action) = self.keybindings.resolve(&mode, &key) else {
            return InputResult::Continue;
        };
        debug!("Key {:?} in {:?} -> {:?}", key.code, mode, action);

        match action {
            KeyAction::Quit => return InputResult::Quit,
            KeyAction::NextField => state.focus_next(),
            KeyAction::PreviousField => state.focus_previous(),
            KeyAction::NextUnit => state.cycle_unit_forward(),
            KeyAction::PreviousUnit => state.cycle_unit_backward(),
            KeyAction::Convert => {
                // Rejections open the warning dialog; nothing else to do here
                let _ = state.perform_conversion();
            }
            KeyAction::ScrollUp => state.scroll_history_up(),
            KeyAction::ScrollDown => state.scroll_history_down(),
            KeyAction::Dismiss => state.dismiss_warning(),
            KeyAction::Help => state.toggle_help(),
        }

        InputResult::Continue
    }

    /// Typing into the value field. Returns `None` when the key is not text.
    fn handle_text_entry(state: &mut ConverterState, key: &KeyEvent) -> Option<InputResult> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                state.push_char(c);
                Some(InputResult::Continue)
            }
            KeyCode::Backspace => {
                state.pop_char();
                Some(InputResult::Continue)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, state: &mut ConverterState, code: KeyCode) -> InputResult {
        handler.handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_fills_value_field() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        for c in "12.5".chars() {
            press(&handler, &mut state, KeyCode::Char(c));
        }
        press(&handler, &mut state, KeyCode::Backspace);
        assert_eq!(state.input, "12.");
    }

    #[test]
    fn test_q_is_text_in_value_field() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        assert_eq!(
            press(&handler, &mut state, KeyCode::Char('q')),
            InputResult::Continue
        );
        assert_eq!(state.input, "q");
    }

    #[test]
    fn test_q_quits_outside_value_field() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        state.focus = Field::Convert;
        assert_eq!(
            press(&handler, &mut state, KeyCode::Char('q')),
            InputResult::Quit
        );
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        let result = handler.handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(result, InputResult::Quit);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_enter_converts_and_records() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        press(&handler, &mut state, KeyCode::Char('1'));
        press(&handler, &mut state, KeyCode::Enter);
        assert_eq!(
            state.result.as_deref(),
            Some("1 m (Metre) = 1000 mm (Millimetre)")
        );
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_warning_blocks_other_keys_until_dismissed() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        press(&handler, &mut state, KeyCode::Enter);
        assert_eq!(state.mode(), AppMode::WarningDialog);

        press(&handler, &mut state, KeyCode::Char('7'));
        press(&handler, &mut state, KeyCode::Tab);
        assert!(state.input.is_empty());
        assert_eq!(state.focus, Field::Value);

        press(&handler, &mut state, KeyCode::Esc);
        assert_eq!(state.mode(), AppMode::Converter);
    }

    #[test]
    fn test_arrows_change_selected_unit() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        press(&handler, &mut state, KeyCode::Tab);
        assert_eq!(state.focus, Field::From);
        press(&handler, &mut state, KeyCode::Right);
        press(&handler, &mut state, KeyCode::Right);
        assert_eq!(state.from_unit, crate::types::Unit::Mile);
    }

    #[test]
    fn test_help_toggles_outside_value_field() {
        let handler = InputHandler::new();
        let mut state = ConverterState::default();
        state.focus = Field::From;
        press(&handler, &mut state, KeyCode::Char('?'));
        assert!(state.help_visible);
        press(&handler, &mut state, KeyCode::Esc);
        assert!(!state.help_visible);
    }
}
