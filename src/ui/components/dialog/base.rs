//! Base dialog component

use crate::ui::widgets::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

const PADDING: u16 = 2;

/// What goes inside a dialog frame
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Wrapped to the dialog width
    pub caption: &'a str,
    /// Extra lines under the caption, drawn as given
    pub details: Vec<Line<'a>>,
    /// Bottom hint (e.g. how to close)
    pub hint: Option<Line<'a>>,
}

/// Render a dialog into `area`, clearing what is behind it
pub fn render_dialog(frame: &mut Frame, area: Rect, config: DialogConfig) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let text_width = area.width.saturating_sub(2 + PADDING * 2) as usize;

    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    content.extend(
        wrap_text(config.caption, text_width)
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(Color::White))),
    );
    content.extend(config.details);
    if let Some(hint) = config.hint {
        content.push(Line::default());
        content.push(hint);
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .padding(Padding::horizontal(PADDING))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(dialog, area);
}
