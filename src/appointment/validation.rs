use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::form::FormInput;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// The first rule a submission broke. `Display` is the text shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    Name,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please enter a valid 10 digit phone number.")]
    Phone,
    #[error("Please select a service.")]
    Service,
    #[error("Please select a future date.")]
    Date,
}

/// Checks name, email, phone, service and date in that order and stops at
/// the first failure. `today` is the local calendar date; dates equal to it
/// are accepted.
pub fn validate_on(input: &FormInput, today: NaiveDate) -> Result<(), ValidationError> {
    if input.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::Name);
    }

    if !EMAIL_RE.is_match(input.email.trim()) {
        return Err(ValidationError::Email);
    }

    if phone_digits(&input.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::Phone);
    }

    if input.service.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(ValidationError::Service);
    }

    if let Some(date) = input.date.as_deref().filter(|d| !d.trim().is_empty()) {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(selected) if selected >= today => {}
            _ => return Err(ValidationError::Date),
        }
    }

    Ok(())
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}
