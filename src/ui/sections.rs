//! Text and gallery section rendering
//!
//! Sections are laid out as a flat list of [`Row`]s at a given width. The
//! same rows drive rendering, scroll bounds and gallery hit-testing.

use super::forms::CONTACT_HEIGHT;
use super::widgets::{fade, wrap_text};
use crate::app::App;
use crate::state::{SectionId, SectionTransition, SectionVisual, SiteContent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns of padding on each side of section text
const SIDE_PADDING: u16 = 2;
const MIN_TEXT_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row<'a> {
    Title(&'a str),
    Intro(String),
    /// Hero counters, drawn live from the counter board
    Stats,
    CardTitle { card: usize, text: &'a str },
    CardBody { card: usize, text: String },
    ImageAlt { image: usize, text: &'a str },
    ImageSrc { image: usize, text: &'a str },
    Blank,
}

fn text_width(body_width: u16) -> usize {
    (body_width.saturating_sub(SIDE_PADDING * 2) as usize).max(MIN_TEXT_WIDTH)
}

fn rows(content: &SiteContent, id: SectionId, body_width: u16) -> Vec<Row<'_>> {
    let Some(section) = content.section(id) else {
        return Vec::new();
    };
    let width = text_width(body_width);

    let mut rows = vec![Row::Title(&section.title), Row::Blank];
    rows.extend(wrap_text(&section.intro, width).into_iter().map(Row::Intro));
    rows.push(Row::Blank);

    if id == SectionId::Home && !content.hero_stats.is_empty() {
        rows.push(Row::Stats);
        rows.push(Row::Blank);
    }

    if id == SectionId::Gallery {
        for (image, img) in content.gallery.iter().enumerate() {
            rows.push(Row::ImageAlt { image, text: &img.alt });
            rows.push(Row::ImageSrc { image, text: &img.src });
        }
        return rows;
    }

    for (card, c) in section.cards.iter().enumerate() {
        rows.push(Row::CardTitle { card, text: &c.title });
        rows.extend(
            wrap_text(&c.body, width.saturating_sub(2).max(1))
                .into_iter()
                .map(|text| Row::CardBody { card, text }),
        );
        rows.push(Row::Blank);
    }
    rows
}

/// Rows a section occupies when laid out at `body_width`
pub fn content_height(content: &SiteContent, id: SectionId, body_width: u16) -> u16 {
    if id == SectionId::Contact {
        return if content.has_section(id) { CONTACT_HEIGHT } else { 0 };
    }
    rows(content, id, body_width).len().min(u16::MAX as usize) as u16
}

/// Gallery image under a body row, accounting for scroll
pub fn gallery_index_at(
    content: &SiteContent,
    body_width: u16,
    scroll: u16,
    body_row: u16,
) -> Option<usize> {
    let gallery = rows(content, SectionId::Gallery, body_width);
    match gallery.get(body_row as usize + scroll as usize)? {
        Row::ImageAlt { image, .. } | Row::ImageSrc { image, .. } => Some(*image),
        _ => None,
    }
}

/// Draw a text or gallery section with its entrance fade applied
pub fn draw_section(frame: &mut Frame, area: Rect, app: &App, visual: SectionVisual) {
    let now = app.frame_time;
    let section_rows = rows(&app.content, visual.section, area.width);
    let revealed = match app.navigator.transition() {
        // The outgoing section keeps everything it already showed
        SectionTransition::FadingOut { .. } => usize::MAX,
        _ => app
            .navigator
            .revealed_items(now, app.content.card_count(visual.section)),
    };

    let title = Style::default()
        .fg(fade(Color::Cyan, visual.opacity))
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(fade(Color::White, visual.opacity));
    let muted = Style::default().fg(Color::DarkGray);
    let accent = Style::default().fg(fade(Color::Yellow, visual.opacity));

    let lines: Vec<Line> = section_rows
        .into_iter()
        .map(|row| match row {
            Row::Title(t) => Line::styled(t.to_string(), title),
            Row::Intro(t) => Line::styled(t, text),
            Row::Stats => {
                let mut spans = Vec::new();
                for (i, counter) in app.counters.counters().iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled("  ·  ", muted));
                    }
                    spans.push(Span::styled(
                        counter.value(now).to_string(),
                        accent.add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(format!(" {}", counter.label), text));
                }
                Line::from(spans)
            }
            Row::CardTitle { card, .. } | Row::CardBody { card, .. } if card >= revealed => {
                Line::default()
            }
            Row::CardTitle { text: t, .. } => {
                Line::styled(format!("▸ {t}"), accent.add_modifier(Modifier::BOLD))
            }
            Row::CardBody { text: t, .. } => Line::styled(format!("  {t}"), text),
            Row::ImageAlt { image, text: t } => {
                if image == app.gallery_selected {
                    Line::styled(
                        format!("▸ {t}"),
                        Style::default()
                            .fg(fade(Color::Cyan, visual.opacity))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::styled(format!("  {t}"), text)
                }
            }
            Row::ImageSrc { text: t, .. } => Line::styled(format!("  {t}"), muted),
            Row::Blank => Line::default(),
        })
        .collect();

    let shifted = Rect {
        x: area.x + SIDE_PADDING,
        y: area.y + visual.offset_rows.min(area.height),
        width: area.width.saturating_sub(SIDE_PADDING * 2),
        height: area.height.saturating_sub(visual.offset_rows),
    };
    let paragraph = Paragraph::new(lines).scroll((app.navigator.scroll_offset(), 0));
    frame.render_widget(paragraph, shifted);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_has_no_height() {
        let content = SiteContent::default();
        assert_eq!(content_height(&content, SectionId::Home, 80), 0);
        assert_eq!(content_height(&content, SectionId::Contact, 80), 0);
    }

    #[test]
    fn test_contact_height_is_fixed() {
        let content = SiteContent::zanaki();
        assert_eq!(content_height(&content, SectionId::Contact, 40), CONTACT_HEIGHT);
        assert_eq!(content_height(&content, SectionId::Contact, 200), CONTACT_HEIGHT);
    }

    #[test]
    fn test_academics_height_at_wide_width() {
        // title, blank, intro, blank, then 5 cards of title + body + blank
        let content = SiteContent::zanaki();
        assert_eq!(content_height(&content, SectionId::Academics, 120), 19);
    }

    #[test]
    fn test_narrow_width_wraps_into_more_rows() {
        let content = SiteContent::zanaki();
        let wide = content_height(&content, SectionId::About, 120);
        let narrow = content_height(&content, SectionId::About, 30);
        assert!(narrow > wide);
    }

    #[test]
    fn test_home_includes_stats_row() {
        let content = SiteContent::zanaki();
        let home = rows(&content, SectionId::Home, 120);
        assert!(home.contains(&Row::Stats));
        assert!(!rows(&content, SectionId::About, 120).contains(&Row::Stats));
    }

    #[test]
    fn test_gallery_height() {
        let content = SiteContent::zanaki();
        // title, blank, intro, blank, then alt + src per image
        assert_eq!(
            content_height(&content, SectionId::Gallery, 120),
            4 + 2 * content.gallery.len() as u16
        );
    }

    #[test]
    fn test_gallery_index_at() {
        let content = SiteContent::zanaki();
        assert_eq!(gallery_index_at(&content, 120, 0, 0), None);
        assert_eq!(gallery_index_at(&content, 120, 0, 3), None);
        assert_eq!(gallery_index_at(&content, 120, 0, 4), Some(0));
        assert_eq!(gallery_index_at(&content, 120, 0, 5), Some(0));
        assert_eq!(gallery_index_at(&content, 120, 0, 6), Some(1));
        assert_eq!(gallery_index_at(&content, 120, 2, 4), Some(1));
        assert_eq!(gallery_index_at(&content, 120, 0, 200), None);
    }
}
