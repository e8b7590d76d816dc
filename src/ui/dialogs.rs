//! Dialog rendering module
//!
//! Modal overlays drawn on top of the converter screen.

use crate::app::WarningDialog;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rectangle of `width_percent` x `height_percent` centered in `parent`,
/// clamped to at least `min_width` x `min_height` cells.
pub fn centered_rect(
    parent: Rect,
    width_percent: u16,
    height_percent: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let width = scale(parent.width, width_percent)
        .max(min_width)
        .min(parent.width);
    let height = scale(parent.height, height_percent)
        .max(min_height)
        .min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Render the warning notification overlay
pub fn render_warning_dialog(f: &mut Frame, dialog: &WarningDialog) {
    let area = centered_rect(f.area(), 50, 30, 36, 7);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.title))
        .title_alignment(Alignment::Center)
        .border_style(Styles::warning_border())
        .style(Style::default().bg(Colors::BG_WARNING));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Styles::key_hint())),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(body, area);
}
