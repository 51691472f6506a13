//! Slide-in notification toast

use crate::state::{PageLayout, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Render the toast at the top right of the body, sliding in from the edge
pub fn render_toast(frame: &mut Frame, layout: &PageLayout, toast: &Toast, now: Instant) {
    let body = layout.body();
    let width = (toast.message.chars().count() as u16 + 4).min(body.width);
    let travel = width as f32 + 1.0;
    let rest_x = body.right().saturating_sub(width + 1);
    let x = rest_x + (toast.offscreen(now) * travel).round() as u16;
    if x >= body.right() || body.height < 3 {
        return;
    }

    let area = Rect::new(x, body.y, width.min(body.right() - x), 3);
    frame.render_widget(Clear, area);
    let widget = Paragraph::new(format!(" {}", toast.message))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(widget, area);
}
