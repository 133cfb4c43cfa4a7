use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub datetime: String,
    pub service: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            other => BookingStatus::Other(other.to_string()),
        }
    }
}

/// Raw submission body. Every field is optional here so that validation can
/// report all missing fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub datetime: Option<String>,
    pub service: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// A validated booking ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub datetime: String,
    pub service: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl BookingRequest {
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["name", "email", "datetime", "service"];

    pub fn validate(self) -> Result<NewBooking, AppError> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        let missing: Vec<&str> = Self::REQUIRED_FIELDS
            .into_iter()
            .zip([&self.name, &self.email, &self.datetime, &self.service])
            .filter(|(_, value)| !present(*value))
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }

        Ok(NewBooking {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            datetime: self.datetime.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            location: self.location,
            notes: self.notes,
        })
    }
}
