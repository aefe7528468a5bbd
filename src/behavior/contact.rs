use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ContactError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been prepared. Please send it from your email client.";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Field values read from the contact form at the moment it was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Name, email and message must be non-empty; phone is optional.
    /// Values are taken as typed, without trimming.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            self.name, self.email, self.phone, self.message
        )
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }

    pub fn rejected(err: &ContactError) -> Self {
        Self::error(err.to_string())
    }

    /// Fallback shown when opening the mail client failed.
    pub fn handoff_failed(recipient: &str) -> Self {
        Self::error(format!(
            "Sorry, there was an error sending your message. Please try emailing us directly at {}",
            recipient
        ))
    }

    pub fn class_name(&self) -> String {
        format!("form-status {}", self.severity.class())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// The mail client handoff is under way; the submit button shows the busy label.
    Sending { original_label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, phone: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn required_fields_must_be_present() {
        assert_eq!(submission("", "a@b.com", "", "hi").validate(), Err(ContactError::MissingFields));
        assert_eq!(submission("A", "", "", "hi").validate(), Err(ContactError::MissingFields));
        assert_eq!(submission("A", "a@b.com", "", "").validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        assert_eq!(submission("", "nope", "", "").validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(submission("A", "a@b.com", "", "hi").validate(), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email("a@@b.com"));
        assert_eq!(submission("A", "not-an-email", "", "hi").validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        assert_eq!(submission(" ", "a@b.com", "", " ").validate(), Ok(()));
    }

    #[test]
    fn body_lists_every_field() {
        let body = submission("Ada", "ada@example.com", "555-0100", "Hello\nthere").body();
        assert_eq!(
            body,
            "Name: Ada\nEmail: ada@example.com\nPhone: 555-0100\n\nMessage:\nHello\nthere"
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let uri = submission("A", "a@b.com", "", "hi & bye").mailto_uri("owner@example.com");
        assert_eq!(
            uri,
            "mailto:owner@example.com\
             ?subject=New%20Contact%20Form%20Submission%20from%20A\
             &body=Name%3A%20A%0AEmail%3A%20a%40b.com%0APhone%3A%20%0A%0AMessage%3A%0Ahi%20%26%20bye"
        );
    }

    #[test]
    fn status_class_carries_severity() {
        assert_eq!(StatusMessage::success("ok").class_name(), "form-status success");
        assert_eq!(StatusMessage::rejected(&ContactError::InvalidEmail).class_name(), "form-status error");
    }

    #[test]
    fn fallback_names_the_recipient() {
        let message = StatusMessage::handoff_failed("owner@example.com");
        assert!(message.text.ends_with("directly at owner@example.com"));
        assert_eq!(message.severity, Severity::Error);
    }
}
