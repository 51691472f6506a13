//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod loading;
mod sections;
mod widgets;

use crate::app::App;
use crate::state::SectionId;
use ratatui::Frame;

pub use forms::contact_slot_at;
pub use sections::{content_height, gallery_index_at};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = app.frame_time;

    if let Some(loading_screen) = app.loading.as_ref().filter(|l| !l.page_ready()) {
        loading::draw(frame, frame.area(), loading_screen);
        return;
    }

    let page = app.layout();
    layout::draw_header(frame, &page, app);

    let body = page.body();
    let visual = app.navigator.visual(now);
    if app.content.has_section(visual.section) {
        match visual.section {
            SectionId::Contact => forms::draw_contact(frame, body, app, visual),
            _ => sections::draw_section(frame, body, app, visual),
        }
    }

    layout::draw_status_bar(frame, &page, app);

    if app.scroll_top.is_visible() {
        layout::draw_scroll_top(frame, &page);
    }
    if app.navigator.menu_open() {
        layout::draw_menu(frame, &page, app);
    }
    if let Some(toast) = &app.contact.toast {
        components::render_toast(frame, &page, toast, now);
    }
    if let Some(image) = app.lightbox.image() {
        components::render_lightbox(frame, &page, image, app.lightbox.scale(now));
    }
    // Sliding overlay goes on top of the page it uncovers
    if let Some(loading_screen) = &app.loading {
        loading::draw(frame, frame.area(), loading_screen);
    }
}
