//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! overlay mode. The same registry feeds key resolution, the nav bar and the
//! help overlay, so the hints shown can never drift from the keys handled.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextField,
    PreviousField,
    NextUnit,
    PreviousUnit,
    Convert,
    ScrollUp,
    ScrollDown,
    Dismiss,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && event.modifiers.contains(self.modifiers)
    }
}

/// A titled group of help lines
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::Quit,
            "Ctrl+C",
            "Quit",
        )];

        self.mode_bindings.insert(
            AppMode::Converter,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::PreviousField, "Up", "Previous field"),
                Keybinding::new(KeyCode::Right, KeyAction::NextUnit, "Right", "Next unit"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousUnit, "Left", "Previous unit"),
                Keybinding::new(KeyCode::Enter, KeyAction::Convert, "Enter", "Convert"),
                Keybinding::new(KeyCode::PageUp, KeyAction::ScrollUp, "PgUp", "Scroll history up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::ScrollDown, "PgDn", "Scroll history down"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::WarningDialog,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "OK"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Close help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Help, "Esc", "Close help"),
            ],
        );
    }

    /// Keybindings for a mode, excluding globals
    pub fn get_bindings(&self, mode: &AppMode) -> &[Keybinding] {
        self.mode_bindings
            .get(mode)
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a key event to an action. Global bindings win.
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.global_bindings
            .iter()
            .chain(self.get_bindings(mode))
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Short (key, description) pairs for the nav bar.
    ///
    /// Only the first binding per action is shown.
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<(String, String)> {
        let mut seen = Vec::new();
        let mut items = Vec::new();
        for binding in self.get_bindings(mode).iter().chain(&self.global_bindings) {
            if seen.contains(&binding.action) {
                continue;
            }
            seen.push(binding.action);
            items.push((binding.display.clone(), binding.description.clone()));
        }
        items
    }

    /// Help sections for a mode
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let to_items = |bindings: &[Keybinding]| {
            bindings
                .iter()
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect::<Vec<_>>()
        };

        let mut sections = Vec::new();
        if *mode == AppMode::Help {
            // Help describes the screen underneath it
            sections.push(HelpSection {
                title: "Converter".to_string(),
                items: to_items(self.get_bindings(&AppMode::Converter)),
            });
        } else {
            sections.push(HelpSection {
                title: "Keys".to_string(),
                items: to_items(self.get_bindings(mode)),
            });
        }
        sections.push(HelpSection {
            title: "Global".to_string(),
            items: to_items(&self.global_bindings),
        });
        sections
    }
}
