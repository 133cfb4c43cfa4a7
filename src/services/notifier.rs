use std::future::Future;

use crate::config::AppConfig;
use crate::models::NewBooking;
use crate::services::email::smtp::SmtpEmailSender;
use crate::services::email::EmailSender;
use crate::services::messaging::twilio::TwilioSmsSender;
use crate::services::messaging::SmsSender;

const NOT_PROVIDED: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Sent,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub sms: ChannelOutcome,
    pub email: ChannelOutcome,
}

/// Operator notifications for new bookings. A channel without a sender is skipped.
pub struct Notifier {
    sms: Option<Box<dyn SmsSender>>,
    email: Option<Box<dyn EmailSender>>,
    operator_phone: String,
    operator_email: String,
}

impl Notifier {
    pub fn new(
        sms: Option<Box<dyn SmsSender>>,
        email: Option<Box<dyn EmailSender>>,
        operator_phone: String,
        operator_email: String,
    ) -> Self {
        Self {
            sms,
            email,
            operator_phone,
            operator_email,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, None, String::new(), String::new())
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let sms = TwilioSmsSender::from_config(config)
            .map(|sender| Box::new(sender) as Box<dyn SmsSender>);
        let email = SmtpEmailSender::from_config(config)?
            .map(|sender| Box::new(sender) as Box<dyn EmailSender>);

        tracing::info!(
            sms = sms.is_some(),
            email = email.is_some(),
            "operator notifications configured"
        );

        Ok(Self::new(
            sms,
            email,
            config.operator_phone.clone(),
            config.operator_email.clone(),
        ))
    }

    /// Attempts both channels concurrently. Failures are logged and reported,
    /// never returned as errors.
    pub async fn notify_new_booking(&self, id: i64, booking: &NewBooking) -> DispatchReport {
        let sms_body = sms_text(booking);
        let subject = email_subject(booking);
        let email_body = email_text(booking);

        let sms = self
            .sms
            .as_ref()
            .map(|sender| sender.send_sms(&self.operator_phone, &sms_body));
        let email = self
            .email
            .as_ref()
            .map(|sender| sender.send_email(&self.operator_email, &subject, &email_body));

        let (sms, email) = tokio::join!(attempt(id, "sms", sms), attempt(id, "email", email));
        DispatchReport { sms, email }
    }
}

async fn attempt<F>(id: i64, channel: &'static str, send: Option<F>) -> ChannelOutcome
where
    F: Future<Output = anyhow::Result<()>>,
{
    let Some(send) = send else {
        tracing::debug!(channel, "notification channel not configured, skipping");
        return ChannelOutcome::Skipped;
    };

    match send.await {
        Ok(()) => {
            tracing::info!(id, channel, "operator notified");
            ChannelOutcome::Sent
        }
        Err(e) => {
            tracing::warn!(id, channel, error = %format!("{e:#}"), "notification failed");
            ChannelOutcome::Failed(format!("{e:#}"))
        }
    }
}

fn or_not_provided(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_PROVIDED)
}

pub fn sms_text(booking: &NewBooking) -> String {
    format!(
        "New booking request from {}: {} on {}",
        booking.name, booking.service, booking.datetime
    )
}

pub fn email_subject(booking: &NewBooking) -> String {
    format!("New booking request: {} ({})", booking.service, booking.name)
}

pub fn email_text(booking: &NewBooking) -> String {
    format!(
        "A new booking request has been submitted.\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Service: {}\n\
         Date/Time: {}\n\
         Location: {}\n\
         Notes: {}\n",
        booking.name,
        booking.email,
        or_not_provided(&booking.phone),
        booking.service,
        booking.datetime,
        or_not_provided(&booking.location),
        or_not_provided(&booking.notes),
    )
}
