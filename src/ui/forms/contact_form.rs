//! Contact form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{Form, SectionVisual};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use crate::ui::widgets::fade;
use crate::validation::ContactField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Rows above the first field (section title + blank)
const FORM_TOP: u16 = 2;
const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 6;
/// Each field box is followed by one row for its error
const ERROR_ROW: u16 = 1;
const MAX_FORM_WIDTH: u16 = 72;

/// (first row, height) of each focusable slot, relative to the section top.
/// Slots 0-4 are the inputs in field order, slot 5 the submit button.
const SLOTS: [(u16, u16); 6] = {
    let name = FORM_TOP;
    let email = name + FIELD_HEIGHT + ERROR_ROW;
    let phone = email + FIELD_HEIGHT + ERROR_ROW;
    let subject = phone + FIELD_HEIGHT + ERROR_ROW;
    let message = subject + FIELD_HEIGHT + ERROR_ROW;
    let submit = message + MESSAGE_HEIGHT + ERROR_ROW;
    [
        (name, FIELD_HEIGHT),
        (email, FIELD_HEIGHT),
        (phone, FIELD_HEIGHT),
        (subject, FIELD_HEIGHT),
        (message, MESSAGE_HEIGHT),
        (submit, BUTTON_HEIGHT),
    ]
};

/// Total rows the contact section occupies
pub const CONTACT_HEIGHT: u16 = SLOTS[5].0 + SLOTS[5].1;

/// Slot under a body row, accounting for scroll
pub fn contact_slot_at(scroll: u16, body_row: u16) -> Option<usize> {
    let row = body_row.saturating_add(scroll);
    SLOTS
        .iter()
        .position(|(start, height)| row >= *start && row < start + height)
}

/// Draw the contact section: title, five fields with error rows, submit button
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App, visual: SectionVisual) {
    let contact = &app.contact;
    let scroll = app.navigator.scroll_offset();
    let width = area.width.saturating_sub(4).min(MAX_FORM_WIDTH);
    let x = area.x + 2;

    // Map a section row range to the screen; None unless fully visible
    let place = |start: u16, height: u16| -> Option<Rect> {
        let top = start.checked_sub(scroll)?;
        (top + height <= area.height).then(|| Rect::new(x, area.y + top, width, height))
    };

    if let Some(title_area) = place(0, 1) {
        let title = app
            .content
            .section(crate::state::SectionId::Contact)
            .map_or("Contact Us", |s| s.title.as_str());
        frame.render_widget(
            Paragraph::new(Line::styled(
                title,
                Style::default()
                    .fg(fade(Color::Cyan, visual.opacity))
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
    }

    let active = contact.form.active_field();
    for (index, field) in ContactField::ALL.iter().enumerate() {
        let (start, height) = SLOTS[index];
        let error = contact.error(*field);
        if let (Some(input), Some(field_area)) =
            (contact.form.get_field(index), place(start, height))
        {
            draw_field(frame, field_area, input, active == index, error);
        }
        if let (Some(message), Some(error_area)) = (error, place(start + height, ERROR_ROW)) {
            draw_field_error(frame, error_area, message);
        }
    }

    let (start, height) = SLOTS[5];
    if let Some(button_area) = place(start, height) {
        let button_area = Rect {
            width: button_area.width.min(24),
            ..button_area
        };
        render_submit_button(
            frame,
            button_area,
            &contact.button,
            contact.form.is_submit_row_active(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_do_not_overlap_and_leave_error_rows() {
        for pair in SLOTS.windows(2) {
            let (start, height) = pair[0];
            assert_eq!(start + height + ERROR_ROW, pair[1].0);
        }
    }

    #[test]
    fn test_contact_height() {
        assert_eq!(CONTACT_HEIGHT, 28);
    }

    #[test]
    fn test_slot_at_maps_rows() {
        assert_eq!(contact_slot_at(0, 0), None);
        assert_eq!(contact_slot_at(0, 2), Some(0));
        assert_eq!(contact_slot_at(0, 4), Some(0));
        // Error row below the name box
        assert_eq!(contact_slot_at(0, 5), None);
        assert_eq!(contact_slot_at(0, 6), Some(1));
        assert_eq!(contact_slot_at(0, 18), Some(4));
        assert_eq!(contact_slot_at(0, 23), Some(4));
        assert_eq!(contact_slot_at(0, 25), Some(5));
        assert_eq!(contact_slot_at(0, 28), None);
    }

    #[test]
    fn test_slot_at_accounts_for_scroll() {
        assert_eq!(contact_slot_at(10, 0), Some(2));
    }
}
