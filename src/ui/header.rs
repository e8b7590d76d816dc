//! Header and common widget rendering
//!
//! Title banner, status line and the navigation bar.

use crate::components::keybindings::KeybindingContext;
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen title shown in the banner
pub const SCREEN_TITLE: &str = "Length Converter";

/// Header renderer containing the title banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the title banner
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "|----|----|----|----|",
                Style::default().fg(Colors::FG_MUTED),
            )]),
            Line::from(vec![Span::styled(SCREEN_TITLE, Styles::title())]),
        ]
    }
}

/// Render a one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Colors::FG_MUTED));
    f.render_widget(status, area);
}

/// Render the navigation bar with key hints for the current mode
pub fn render_nav_bar(f: &mut Frame, mode: &AppMode, keybinding_ctx: &KeybindingContext, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, description)) in keybinding_ctx.get_nav_items(mode).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, Styles::key_hint()));
        spans.push(Span::styled(format!(" {}", description), Styles::key_description()));
    }

    let nav_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Colors::BG_FIELD));
    f.render_widget(nav_bar, area);
}
