use crate::config::FormConfig;

/// Values read from the appointment form at the moment of submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    pub date: Option<String>,
}

impl FormInput {
    /// Builds a snapshot the way the page reads it: text fields trimmed,
    /// empty selections and dates collapsed to `None`.
    pub fn from_raw(name: &str, email: &str, phone: &str, service: &str, date: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            service: non_empty(service),
            date: non_empty(date),
        }
    }

    /// Key/value pairs posted as the multipart body.
    pub fn multipart_fields(&self, config: &FormConfig) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("access_key", config.access_key.clone()),
            ("subject", config.subject.clone()),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("service", self.service.clone().unwrap_or_default()),
        ];
        if let Some(date) = &self.date {
            fields.push(("date", date.clone()));
        }
        fields
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormConfig {
        FormConfig {
            endpoint: "https://relay.test/submit".to_string(),
            access_key: "key-123".to_string(),
            subject: "Booking".to_string(),
            auto_hide_ms: 5000,
        }
    }

    #[test]
    fn from_raw_trims_and_drops_empty_optionals() {
        let input = FormInput::from_raw("  Jane Doe ", " jane@example.com", "987 654 3210 ", "", "");
        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.phone, "987 654 3210");
        assert_eq!(input.service, None);
        assert_eq!(input.date, None);
    }

    #[test]
    fn multipart_fields_carry_relay_metadata_and_skip_missing_date() {
        let input = FormInput::from_raw("Jane Doe", "jane@example.com", "9876543210", "Consulting", "");
        let fields = input.multipart_fields(&config());

        assert_eq!(fields[0], ("access_key", "key-123".to_string()));
        assert_eq!(fields[1], ("subject", "Booking".to_string()));
        assert!(fields.contains(&("service", "Consulting".to_string())));
        assert!(fields.iter().all(|(key, _)| *key != "date"));
    }

    #[test]
    fn multipart_fields_include_date_when_present() {
        let input = FormInput::from_raw("Jane Doe", "jane@example.com", "9876543210", "Consulting", "2030-01-02");
        let fields = input.multipart_fields(&config());
        assert_eq!(fields.last(), Some(&("date", "2030-01-02".to_string())));
    }
}
