//! Contact form submit button

use crate::state::SubmitButton;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the submit button; greyed out with its busy label while sending
pub fn render_submit_button(frame: &mut Frame, area: Rect, button: &SubmitButton, is_focused: bool) {
    let (border, text) = match (button, is_focused) {
        (SubmitButton::Sending { .. }, _) => (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ),
        (SubmitButton::Ready, true) => (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (SubmitButton::Ready, false) => (
            Style::default().fg(Color::Green),
            Style::default().fg(Color::Green),
        ),
    };

    let label = Paragraph::new(format!(" {} ", button.label()))
        .style(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(label, area);
}
