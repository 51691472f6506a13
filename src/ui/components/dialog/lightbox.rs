//! Gallery lightbox overlay

use super::base::{render_dialog, DialogConfig};
use crate::state::{GalleryImage, PageLayout};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the enlarged image card over a dimmed page
pub fn render_lightbox(frame: &mut Frame, layout: &PageLayout, image: &GalleryImage, scale: f32) {
    // Dim the page behind the backdrop
    frame
        .buffer_mut()
        .set_style(layout.area, Style::default().fg(Color::DarkGray));

    let area = layout.lightbox(scale);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or click outside to close"),
    ]);

    render_dialog(
        frame,
        area,
        DialogConfig {
            title: "Gallery",
            accent: Color::Cyan,
            caption: &image.alt,
            details: vec![
                Line::default(),
                Line::styled(format!("[ {} ]", image.src), Style::default().fg(Color::Gray)),
            ],
            hint: Some(hint),
        },
    );

    // Only once the frame is big enough to hold the control
    let close = layout.lightbox_close(scale);
    if close.width > 0 && area.width > 6 {
        frame.render_widget(
            Paragraph::new("[x]").style(Style::default().fg(Color::Red).bg(Color::Black)),
            close,
        );
    }
}
