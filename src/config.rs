use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address every contact form submission is addressed to.
    pub recipient: String,
    /// Distance above the viewport bottom an element must cross before it is revealed.
    pub reveal_threshold: f64,
    /// Space left for the fixed header when scrolling to an anchor.
    pub header_offset: f64,
    /// Scroll offset past which the header switches to its scrolled look.
    pub header_scroll_threshold: f64,
    pub status_hide_ms: u32,
    pub hero_fade_delay_ms: u32,
    pub hero_transition: String,
    pub busy_label: String,
    pub reveal_active_class: String,
    pub selectors: Selectors,
    pub fields: ContactFields,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipient: "Binyominperry@gmail.com".to_string(),
            reveal_threshold: 150.0,
            header_offset: 80.0,
            header_scroll_threshold: 100.0,
            status_hide_ms: 5000,
            hero_fade_delay_ms: 100,
            hero_transition: "opacity 1s ease-in-out".to_string(),
            busy_label: "Sending...".to_string(),
            reveal_active_class: "active".to_string(),
            selectors: Selectors::default(),
            fields: ContactFields::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub reveal: String,
    pub anchor: String,
    pub header: String,
    pub contact_form: String,
    pub form_status: String,
    pub submit_button: String,
    pub portfolio_item: String,
    pub hero_text: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            reveal: ".reveal".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            header: ".header".to_string(),
            contact_form: "#contact-form".to_string(),
            form_status: "#form-status".to_string(),
            submit_button: "button[type=\"submit\"]".to_string(),
            portfolio_item: ".portfolio-item".to_string(),
            hero_text: ".hero-text".to_string(),
        }
    }
}

/// Element ids of the contact form inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            message: "message".to_string(),
        }
    }
}
