use std::env;

/// Bookings on a single date at or above this count mark the date as full.
pub const DEFAULT_DAILY_BOOKING_LIMIT: i64 = 4;

pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub operator_phone: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,
    pub operator_email: String,
    pub daily_booking_limit: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let smtp_username = var("SMTP_USERNAME").unwrap_or_default();
        let operator_email = var("OPERATOR_EMAIL").unwrap_or_default();
        let smtp_from = var("SMTP_FROM").unwrap_or_else(|| {
            if smtp_username.contains('@') {
                smtp_username.clone()
            } else {
                operator_email.clone()
            }
        });

        Self {
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(5000),
            database_url: var("DATABASE_URL").unwrap_or_else(|| "bookings.db".to_string()),
            twilio_account_sid: var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_phone_number: var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            operator_phone: var("OPERATOR_PHONE").unwrap_or_default(),
            smtp_host: var("SMTP_HOST").unwrap_or_default(),
            smtp_port: var("SMTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_username,
            smtp_password: var("SMTP_PASSWORD").unwrap_or_default(),
            smtp_from,
            operator_email,
            daily_booking_limit: DEFAULT_DAILY_BOOKING_LIMIT,
        }
    }

    pub fn sms_enabled(&self) -> bool {
        !self.twilio_account_sid.is_empty()
            && !self.twilio_auth_token.is_empty()
            && !self.twilio_phone_number.is_empty()
            && !self.operator_phone.is_empty()
    }

    pub fn email_enabled(&self) -> bool {
        !self.smtp_host.is_empty() && !self.operator_email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "bookings.db");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.daily_booking_limit, 4);
        assert!(!config.sms_enabled());
        assert!(!config.email_enabled());
    }

    #[test]
    fn test_sms_requires_all_four_values() {
        let partial = config_from(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_PHONE_NUMBER", "+15550000000"),
        ]);
        assert!(!partial.sms_enabled());

        let full = config_from(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_PHONE_NUMBER", "+15550000000"),
            ("OPERATOR_PHONE", "+15559999999"),
        ]);
        assert!(full.sms_enabled());
        assert!(!full.email_enabled());
    }

    #[test]
    fn test_email_needs_host_and_destination_only() {
        let config = config_from(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("OPERATOR_EMAIL", "ops@example.com"),
        ]);
        assert!(config.email_enabled());
        assert_eq!(config.smtp_from, "ops@example.com");
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("SMTP_HOST", "   "), ("OPERATOR_EMAIL", "ops@example.com")]);
        assert!(!config.email_enabled());
    }

    #[test]
    fn test_smtp_from_prefers_explicit_then_username() {
        let config = config_from(&[
            ("SMTP_USERNAME", "mailer@example.com"),
            ("OPERATOR_EMAIL", "ops@example.com"),
        ]);
        assert_eq!(config.smtp_from, "mailer@example.com");

        let config = config_from(&[
            ("SMTP_FROM", "bookings@example.com"),
            ("SMTP_USERNAME", "mailer@example.com"),
        ]);
        assert_eq!(config.smtp_from, "bookings@example.com");
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = config_from(&[("PORT", "abc"), ("SMTP_PORT", "465")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.smtp_port, 465);
    }
}
