//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the converter
//! screen, its dialogs and the help overlay.
//!
//! # Usage
//! ```rust
//! use lengthtui::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Screen background (slate)
    pub const BG_PRIMARY: Color = Color::Rgb(30, 41, 59);

    /// Form panel background
    pub const BG_PANEL: Color = Color::Rgb(51, 65, 85);

    /// Input and selector background
    pub const BG_FIELD: Color = Color::Rgb(15, 23, 42);

    /// History entry background
    pub const BG_ENTRY: Color = Color::Rgb(71, 85, 105);

    /// Warning dialog background
    pub const BG_WARNING: Color = Color::Rgb(40, 30, 15);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Placeholder and hint text
    pub const FG_MUTED: Color = Color::Gray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Focus borders, titles, button
    pub const PRIMARY: Color = Color::Cyan;

    /// Result line
    pub const RESULT: Color = Color::LightCyan;

    /// Key names in nav bar and help
    pub const KEY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const WARNING: Color = Color::Yellow;

    pub const SUCCESS: Color = Color::Green;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Commonly used style combinations
pub struct Styles;

impl Styles {
    /// Screen title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section heading such as "History"
    pub fn heading() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of a control, highlighted when focused
    pub fn field_border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::PRIMARY)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Body of an input or selector
    pub fn field() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_FIELD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Colors::FG_MUTED).bg(Colors::BG_FIELD)
    }

    /// Convert button, inverted when focused
    pub fn button(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Colors::BG_FIELD)
                .bg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::FG_PRIMARY).bg(Color::Rgb(8, 145, 178))
        }
    }

    pub fn result() -> Style {
        Style::default()
            .fg(Colors::RESULT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn history_entry() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_ENTRY)
    }

    /// "No history available" placeholder
    pub fn empty_history() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Colors::KEY).add_modifier(Modifier::BOLD)
    }

    pub fn key_description() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn warning_border() -> Style {
        Style::default()
            .fg(Colors::WARNING)
            .bg(Colors::BG_WARNING)
            .add_modifier(Modifier::BOLD)
    }
}
