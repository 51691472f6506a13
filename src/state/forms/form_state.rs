//! Contact form inputs and focus handling

use super::field::FormField;
use crate::validation::{ContactField, ContactSubmission};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The five contact inputs plus the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Focus index of the submit button
    pub const SUBMIT_ROW: usize = 5;

    pub fn new() -> Self {
        Self {
            name: FormField::text(ContactField::Name, "Full Name *"),
            email: FormField::text(ContactField::Email, "Email Address *"),
            phone: FormField::text(ContactField::Phone, "Phone Number")
                .with_placeholder("e.g. 0712 345 678"),
            subject: FormField::text(ContactField::Subject, "Subject *"),
            message: FormField::multiline(ContactField::Message, "Message *"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Focus a specific input
    pub fn focus(&mut self, field: ContactField) {
        self.active_field_index = ContactField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
    }

    /// Snapshot the raw values as a submission
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            subject: self.subject.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Clear every input and return focus to the first one
    pub fn reset(&mut self) {
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.subject,
            &mut self.message,
        ] {
            field.clear();
        }
        self.active_field_index = 0;
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Enter adds a newline in the message box; elsewhere it is ignored
    pub fn newline(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_newline();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // name, email, phone, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.subject),
            4 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        ContactField::ALL.get(index).map(|f| self.field(*f))
    }
}
