//! Form field value objects

use crate::validation::ContactField;

/// A single text input with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: ContactField,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new single-line field
    pub fn text(field: ContactField, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
            value: String::new(),
            is_multiline: false,
            placeholder: None,
        }
    }

    /// Create a new multi-line field
    pub fn multiline(field: ContactField, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(field, label)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Newline, only for multi-line fields
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder.as_deref().unwrap_or("")
        } else {
            &self.value
        }
    }

    pub fn is_showing_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text(ContactField::Name, "Full Name");
        assert_eq!(field.field, ContactField::Name);
        assert_eq!(field.label, "Full Name");
        assert_eq!(field.as_text(), "");
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(ContactField::Subject, "Subject");
        field.push_char('H');
        field.push_char('i');
        assert_eq!(field.as_text(), "Hi");
        field.pop_char();
        assert_eq!(field.as_text(), "H");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = FormField::text(ContactField::Subject, "Subject");
        single.push_newline();
        assert_eq!(single.as_text(), "");

        let mut multi = FormField::multiline(ContactField::Message, "Message");
        multi.push_char('a');
        multi.push_newline();
        assert_eq!(multi.as_text(), "a\n");
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut field =
            FormField::text(ContactField::Phone, "Phone").with_placeholder("+255712345678");
        assert!(field.is_showing_placeholder());
        assert_eq!(field.display_value(), "+255712345678");

        field.set_text("07");
        assert!(!field.is_showing_placeholder());
        assert_eq!(field.display_value(), "07");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text(ContactField::Email, "Email");
        field.set_text("a@b.c");
        field.clear();
        assert_eq!(field.as_text(), "");
    }
}
