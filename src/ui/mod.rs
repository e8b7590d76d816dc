//! User interface rendering module
//!
//! - `header` - Title banner, status line and nav bar
//! - `screens` - Converter form and history list
//! - `dialogs` - Warning dialog and overlay geometry

pub mod dialogs;
mod header;
pub mod screens;

use crate::app::ConverterState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Colors;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use header::{HeaderRenderer, SCREEN_TITLE};

/// UI renderer for the application
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current session state
    pub fn render(&self, f: &mut Frame, state: &ConverterState, keybinding_ctx: &KeybindingContext) {
        f.render_widget(
            Block::default().style(Style::default().bg(Colors::BG_PRIMARY)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(19), // Form
                Constraint::Min(3),     // History
                Constraint::Length(1),  // Status
                Constraint::Length(1),  // Navigation bar
            ])
            .split(f.area());

        self.header.render_header(f, chunks[0]);
        screens::render_converter_form(f, state, chunks[1]);
        screens::render_history(f, state, chunks[2]);
        header::render_status(f, chunks[3], &state.status_message);

        let mode = state.mode();
        header::render_nav_bar(f, &mode, keybinding_ctx, chunks[4]);

        // Overlays last so they sit on top
        if state.help_visible {
            HelpOverlay::new(&mode, keybinding_ctx).render(f, f.area());
        }
        if let Some(ref warning) = state.warning {
            dialogs::render_warning_dialog(f, warning);
        }
    }
}
