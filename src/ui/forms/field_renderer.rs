//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
///
/// `error` is drawn on the row just below the field's box, when the
/// caller left room for it.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error.is_some(), is_active) {
        (_, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let value_style = if field.is_showing_placeholder() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .display_value()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            // Cursor goes after the typed text, before any placeholder
            if field.is_showing_placeholder() {
                lines.insert(0, Line::from(Span::styled(cursor, cursor_style)));
            } else if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        let spans = if field.is_showing_placeholder() {
            vec![
                Span::styled(cursor, cursor_style),
                Span::styled(field.display_value(), value_style),
            ]
        } else {
            vec![
                Span::styled(field.display_value(), value_style),
                Span::styled(cursor, cursor_style),
            ]
        };
        Paragraph::new(Line::from(spans))
    };

    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a field's error message in a single row
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        Span::styled(error, Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
