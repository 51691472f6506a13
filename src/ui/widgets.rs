//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// Wraps `render_stateful_widget` with a `ListState`, so the list scrolls to
/// keep the selected item in view.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Terminal stand-in for opacity: full color, then gray, then dark gray
pub fn fade(color: Color, opacity: f32) -> Color {
    if opacity >= 0.66 {
        color
    } else if opacity >= 0.33 {
        Color::Gray
    } else {
        Color::DarkGray
    }
}

/// Wrap text to fit within a maximum width (in characters)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_len += 1;
            }
            current_line.push_str(word);
            current_len += word_len;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("Morning assembly on the main ground", 16),
            vec!["Morning assembly", "on the main", "ground"]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_long_word_is_not_split() {
        assert_eq!(wrap_text("Kiswahili", 4), vec!["Kiswahili"]);
    }

    #[test]
    fn test_fade_steps() {
        assert_eq!(fade(Color::Cyan, 1.0), Color::Cyan);
        assert_eq!(fade(Color::Cyan, 0.5), Color::Gray);
        assert_eq!(fade(Color::Cyan, 0.1), Color::DarkGray);
    }
}
