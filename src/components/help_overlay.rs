//! Help overlay component
//!
//! Displays context-sensitive help in a centered window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::Colors;
use crate::types::Unit;
use crate::ui::dialogs::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections),
        }
    }

    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Length Converter Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Self::section_title(&section.title));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::KEY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        // Unit reference: factor per metre
        lines.push(Self::section_title("Units"));
        for unit in Unit::iter() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{:<18}", unit.label()),
                    Style::default().fg(Colors::PRIMARY),
                ),
                Span::styled(
                    format!("{} per metre", unit.factor()),
                    Style::default().fg(Colors::FG_MUTED),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Colors::FG_MUTED),
        )]));

        lines
    }

    fn section_title(title: &str) -> Line<'static> {
        Line::from(vec![Span::styled(
            format!("  {}  ", title),
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )])
    }

    /// Number of lines of help text
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent, 60, 80, 50, 15);
        f.render_widget(Clear, area);

        let window = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(Colors::PRIMARY)),
            )
            .style(Style::default().bg(Colors::BG_FIELD));
        f.render_widget(window, area);
    }
}
