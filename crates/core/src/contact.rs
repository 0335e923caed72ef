use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MIN_MESSAGE_LEN: usize = 10;

/// A submission of the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field name -> message; empty when the form is valid
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if !is_valid_email(&self.email) {
            errors.insert("email", "Valid email is required");
        }
        if self.subject.trim().is_empty() {
            errors.insert("subject", "Subject is required");
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.insert("message", "Message should be at least 10 characters");
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
