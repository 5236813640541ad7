use super::validation::ValidationError;

pub const SUCCESS_TEXT: &str = "Appointment request sent successfully! We'll contact you soon.";
pub const SERVER_FALLBACK_TEXT: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please check your connection and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
    Warning,
}

impl MessageStyle {
    pub fn glyph(self) -> &'static str {
        match self {
            MessageStyle::Success => "✅",
            MessageStyle::Error => "❌",
            MessageStyle::Warning => "⚠️",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            MessageStyle::Success => "rgba(46, 204, 113, 0.1)",
            MessageStyle::Error => "rgba(231, 76, 60, 0.1)",
            MessageStyle::Warning => "rgba(241, 196, 15, 0.1)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MessageStyle::Success => "#27ae60",
            MessageStyle::Error => "#c0392b",
            MessageStyle::Warning => "#f39c12",
        }
    }

    pub fn inline_style(self) -> String {
        format!("display: block; background-color: {}; color: {};", self.background(), self.color())
    }
}

/// Terminal result of one request to the relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    ServerError(String),
    NetworkError(String),
}

impl SubmissionOutcome {
    pub fn success() -> Self {
        SubmissionOutcome::Success(SUCCESS_TEXT.to_string())
    }

    pub fn server_error(detail: Option<&str>) -> Self {
        let detail = detail.filter(|d| !d.is_empty()).unwrap_or(SERVER_FALLBACK_TEXT);
        SubmissionOutcome::ServerError(format!("Error: {}", detail))
    }

    pub fn network_error() -> Self {
        SubmissionOutcome::NetworkError(NETWORK_ERROR_TEXT.to_string())
    }

    pub fn style(&self) -> MessageStyle {
        match self {
            SubmissionOutcome::Success(_) => MessageStyle::Success,
            SubmissionOutcome::ServerError(_) => MessageStyle::Error,
            SubmissionOutcome::NetworkError(_) => MessageStyle::Warning,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SubmissionOutcome::Success(text)
            | SubmissionOutcome::ServerError(text)
            | SubmissionOutcome::NetworkError(text) => text,
        }
    }
}

/// What the message channel currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub style: MessageStyle,
}

impl FormMessage {
    pub fn display_text(&self) -> String {
        format!("{} {}", self.style.glyph(), self.text)
    }
}

impl From<&SubmissionOutcome> for FormMessage {
    fn from(outcome: &SubmissionOutcome) -> Self {
        Self {
            text: outcome.text().to_string(),
            style: outcome.style(),
        }
    }
}

impl From<&ValidationError> for FormMessage {
    fn from(err: &ValidationError) -> Self {
        Self {
            text: err.to_string(),
            style: MessageStyle::Warning,
        }
    }
}
