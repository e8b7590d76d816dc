//! Converter screen.
//!
//! Renders the value field, the two unit selectors, the Convert button, the
//! last result and the session history.

use crate::app::{ConverterState, Field};
use crate::history::History;
use crate::theme::{Colors, Styles};
use crate::types::Unit;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Placeholder for the empty value field
pub const VALUE_PLACEHOLDER: &str = "Enter value";

/// Render the converter form into `area`
pub fn render_converter_form(f: &mut Frame, state: &ConverterState, area: Rect) {
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE))
        .style(Style::default().bg(Colors::BG_PANEL));
    let inner = panel.inner(area);
    f.render_widget(panel, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Value
            Constraint::Length(3), // From
            Constraint::Length(3), // To
            Constraint::Length(3), // Convert button
            Constraint::Min(1),    // Result
        ])
        .split(inner);

    render_value_field(f, state, chunks[0]);
    render_unit_selector(f, "From", state.from_unit, state.focus == Field::From, chunks[1]);
    render_unit_selector(f, "To", state.to_unit, state.focus == Field::To, chunks[2]);
    render_convert_button(f, state.focus == Field::Convert, chunks[3]);

    if let Some(ref result) = state.result {
        let result_widget = Paragraph::new(result.as_str())
            .alignment(Alignment::Center)
            .style(Styles::result())
            .wrap(Wrap { trim: true });
        f.render_widget(result_widget, chunks[4]);
    }
}

fn render_value_field(f: &mut Frame, state: &ConverterState, area: Rect) {
    let focused = state.focus == Field::Value;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Value ")
        .border_style(Styles::field_border(focused));

    let paragraph = if state.input.is_empty() {
        Paragraph::new(VALUE_PLACEHOLDER).style(Styles::placeholder())
    } else {
        Paragraph::new(state.input.as_str()).style(Styles::field())
    };
    f.render_widget(paragraph.block(block), area);

    if focused && state.mode() == crate::app::AppMode::Converter {
        let width = state.input.chars().count() as u16;
        let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_unit_selector(f: &mut Frame, title: &str, unit: Unit, focused: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Styles::field_border(focused));

    let label = if focused {
        format!("< {} >", unit.label())
    } else {
        unit.label()
    };

    let selector = Paragraph::new(label).style(Styles::field()).block(block);
    f.render_widget(selector, area);
}

fn render_convert_button(f: &mut Frame, focused: bool, area: Rect) {
    let button = Paragraph::new("Convert")
        .alignment(Alignment::Center)
        .style(Styles::button(focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::field_border(focused)),
        );
    f.render_widget(button, area);
}

/// Lines shown in the history section, in insertion order
pub fn history_lines(history: &History) -> Vec<String> {
    if history.is_empty() {
        vec![History::EMPTY_MESSAGE.to_string()]
    } else {
        history.iter().map(|record| record.to_string()).collect()
    }
}

/// Render the "History" section
pub fn render_history(f: &mut Frame, state: &ConverterState, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(Span::styled(" History ", Styles::heading()))
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE));

    if state.history.is_empty() {
        let empty = Paragraph::new(History::EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Styles::empty_history())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history_lines(&state.history)
        .into_iter()
        .skip(state.history_scroll)
        .map(|line| ListItem::new(Line::from(line)).style(Styles::history_entry()))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
