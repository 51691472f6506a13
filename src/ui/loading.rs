//! Loading screen rendering with ASCII art logo

use crate::state::LoadingScreen;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const LOGO: [&str; 5] = [
    "███████  █████  ███    ██  █████  ██   ██ ██",
    "   ███  ██   ██ ████   ██ ██   ██ ██  ██  ██",
    "  ███   ███████ ██ ██  ██ ███████ █████   ██",
    " ███    ██   ██ ██  ██ ██ ██   ██ ██  ██  ██",
    "███████ ██   ██ ██   ████ ██   ██ ██   ██ ██",
];

const SUBTITLE: &str = "SECONDARY SCHOOL";
const HINT: &str = "Press any key to skip";

fn logo_lines() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{SUBTITLE:^width$}", width = LOGO[0].chars().count()),
        Style::default().fg(Color::Gray),
    )));
    lines
}

/// Draw the loading screen, sliding the logo off the top as it finishes
pub fn draw(frame: &mut Frame, area: Rect, loading: &LoadingScreen) {
    // The overlay shrinks from the bottom as it slides up
    let covered = area.height.saturating_sub(loading.scroll_offset as u16);
    if covered == 0 {
        return;
    }
    frame.render_widget(Clear, Rect { height: covered, ..area });

    let lines = logo_lines();

    let logo_height = lines.len() as u16;
    let logo_width = LOGO[0].chars().count() as u16;

    // Can go negative once the logo starts leaving the screen
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - loading.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.bottom().saturating_sub(render_y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Hint only while the logo is still
    if loading.scroll_offset < 1.0 && area.height >= 2 {
        let hint_x = area.x + (area.width.saturating_sub(HINT.len() as u16)) / 2;
        let hint_area = Rect {
            x: hint_x,
            y: area.y + area.height - 2,
            width: (HINT.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
