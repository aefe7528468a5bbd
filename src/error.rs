use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a contact form submission is turned away before the mail client is opened.
/// The display text is what the visitor sees in the status box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(describe_js(&value))
    }
}

pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_errors_render_visitor_text() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn missing_element_names_the_selector() {
        let err = DomError::MissingElement("#contact-form".to_string());
        assert_eq!(err.to_string(), "missing element `#contact-form`");
    }
}
