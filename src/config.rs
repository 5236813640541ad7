use log::Level;

pub const AUTO_HIDE_MS: u32 = 5000;
pub const BUSY_LABEL: &str = "Sending...";
pub const FORM_SUBJECT: &str = "New appointment request";
pub const SUBMIT_LABEL: &str = "Request Appointment";

pub const SITE_NAME: &str = "Northside Studio";
pub const WHATSAPP_URL: &str = "https://wa.me/15550100000";
pub const SERVICES: &[&str] = &["Consulting", "Strategy Session", "Follow-up Visit"];

pub fn get_form_relay_url() -> &'static str {
    option_env!("FORM_RELAY_URL").unwrap_or("https://api.web3forms.com/submit")
}

pub fn get_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Everything the appointment form needs to reach the relay.
#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub endpoint: String,
    pub access_key: String,
    pub subject: String,
    pub auto_hide_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: get_form_relay_url().to_string(),
            access_key: get_access_key().to_string(),
            subject: FORM_SUBJECT.to_string(),
            auto_hide_ms: AUTO_HIDE_MS,
        }
    }
}
