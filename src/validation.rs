//! Contact form validation rules
//!
//! [`validate`] is a pure function of the submission. Every rule runs; the
//! result collects one message per failing field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const NAME_INVALID_CHARS: &str = "Name should only contain letters and spaces";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str =
    "Please enter a valid Tanzanian phone number (e.g. +255712345678 or 0712345678)";
pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 3 characters long";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

const MIN_NAME_LEN: usize = 2;
const MIN_SUBJECT_LEN: usize = 3;
const MIN_MESSAGE_LEN: usize = 10;

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form field name, as posted to the endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values from one contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

/// Per-field error messages; empty means the submission is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ContactField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    fn insert(&mut self, field: ContactField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Validate a submission against every field rule
pub fn validate(submission: &ContactSubmission) -> ValidationResult {
    let mut result = ValidationResult::default();

    let name = submission.get(ContactField::Name).trim();
    if name.chars().count() < MIN_NAME_LEN {
        result.insert(ContactField::Name, NAME_TOO_SHORT);
    } else if !is_letters_and_spaces(name) {
        result.insert(ContactField::Name, NAME_INVALID_CHARS);
    }

    if !is_valid_email(submission.get(ContactField::Email).trim()) {
        result.insert(ContactField::Email, EMAIL_INVALID);
    }

    let phone = normalize_phone(submission.get(ContactField::Phone).trim());
    if !phone.is_empty() && !is_valid_phone(&phone) {
        result.insert(ContactField::Phone, PHONE_INVALID);
    }

    if submission.get(ContactField::Subject).trim().chars().count() < MIN_SUBJECT_LEN {
        result.insert(ContactField::Subject, SUBJECT_TOO_SHORT);
    }

    if submission.get(ContactField::Message).trim().chars().count() < MIN_MESSAGE_LEN {
        result.insert(ContactField::Message, MESSAGE_TOO_SHORT);
    }

    result
}

/// `^[A-Za-z\s]+$`
fn is_letters_and_spaces(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
///
/// No whitespace anywhere, exactly one `@` with a non-empty local part, and
/// a dot in the domain with at least one character on each side of it.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == '.' && i >= 1 && i + 1 < chars.len())
}

/// Drop whitespace, hyphens and parentheses
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// `^(?:\+255|0)[67]\d{8}$` on an already normalized number
pub fn is_valid_phone(value: &str) -> bool {
    let rest = if let Some(rest) = value.strip_prefix("+255") {
        rest
    } else if let Some(rest) = value.strip_prefix('0') {
        rest
    } else {
        return false;
    };

    let mut chars = rest.chars();
    if !matches!(chars.next(), Some('6' | '7')) {
        return false;
    }
    let digits: Vec<char> = chars.collect();
    digits.len() == 8 && digits.iter().all(char::is_ascii_digit)
}
