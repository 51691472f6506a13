//! Layout components (header, dropdown menu, status bar)

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{PageLayout, SectionId, BRAND, MENU_BUTTON_LABEL, SCROLL_TOP_LABEL};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the header: brand on the left, nav tabs or the menu button
pub fn draw_header(frame: &mut Frame, layout: &PageLayout, app: &App) {
    let header = layout.header();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, header);
    if header.height < 3 {
        return;
    }

    let brand = Rect::new(
        header.x + 2,
        header.y + 1,
        (BRAND.chars().count() as u16).min(header.width.saturating_sub(4)),
        1,
    );
    frame.render_widget(
        Paragraph::new(BRAND).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        brand,
    );

    for (id, rect) in layout.nav_tabs() {
        let style = if app.navigator.is_highlighted(id) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(format!(" {} ", id.label())).style(style), rect);
    }

    if let Some(rect) = layout.menu_button() {
        let style = if app.navigator.menu_open() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Paragraph::new(format!(" {MENU_BUTTON_LABEL} ")).style(style), rect);
    }
}

/// Draw the open dropdown menu over the body
pub fn draw_menu(frame: &mut Frame, layout: &PageLayout, app: &App) {
    let area = layout.dropdown();
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let style = if app.navigator.is_highlighted(*id) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", i + 1, id.label())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Menu ")
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    render_scrollable_list(frame, area, list, app.menu_selected);
}

/// Draw the scroll-to-top control in the bottom right of the body
pub fn draw_scroll_top(frame: &mut Frame, layout: &PageLayout) {
    let area = layout.scroll_top_button();
    frame.render_widget(
        Paragraph::new(format!(" {SCROLL_TOP_LABEL} "))
            .style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, layout: &PageLayout, app: &App) {
    let status_area = layout.status_bar();

    let mut spans = vec![];

    // Office hours
    match app.office.status() {
        Some(status) if status.is_open() => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
            spans.push(Span::styled(status.label(), Style::default().fg(Color::Green)));
        }
        Some(status) => {
            spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red)));
            spans.push(Span::styled(status.label(), Style::default().fg(Color::Red)));
        }
        None => {
            spans.push(Span::styled(
                " Checking office hours…",
                Style::default().fg(Color::Gray),
            ));
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: status_area.right().saturating_sub(width),
        width: width.min(status_area.width),
        ..status_area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has input
fn hints(app: &App) -> String {
    if app.lightbox.is_visible() {
        return "Esc/x:close".to_string();
    }
    if app.navigator.menu_open() {
        return "j/k:nav  Enter:go  1-7:jump  Esc:close".to_string();
    }
    match app.navigator.input_section() {
        SectionId::Gallery => "Tab:select  Enter:enlarge  ←/→:section  m:menu".to_string(),
        SectionId::Contact => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:send  Esc:top  ←/→:section  F2:menu")
        }
        _ => "1-7:section  ←/→:prev/next  j/k:scroll  g:top  m:menu  q:quit".to_string(),
    }
}
