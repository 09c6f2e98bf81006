use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The requester identity attached to a booking, resolved through an
/// [`IdentityProvider`](crate::services::identity::IdentityProvider) and
/// consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    pub id: Uuid,
    pub name: String,
}

/// A booking request as submitted: every field the requester controls is
/// optional until validation. Missing fields are rejected, never defaulted.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub provider_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub requester: Requester,
}

impl BookingDraft {
    /// Names of the required fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.provider_id.is_none() {
            missing.push("provider_id");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        missing
    }
}

/// A validated booking as handed to the persistence gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub provider_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub requester: Requester,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub provider_name: String,
    pub date: NaiveDate,
    /// Rendered "HH:MM", matching the provider's offered-slot display.
    pub time: String,
    pub requester_name: String,
}

impl BookingConfirmation {
    pub fn from_record(record: &BookingRecord) -> Self {
        Self {
            booking_id: record.id,
            provider_name: record.provider_name.clone(),
            date: record.date,
            time: record.time.format("%H:%M").to_string(),
            requester_name: record.requester.name.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("booking store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingField(Vec<&'static str>),

    #[error("unknown provider: {0}")]
    UnknownProvider(Uuid),

    #[error("{provider} does not offer a {time} slot on {date}")]
    SlotNotOffered {
        provider: String,
        date: NaiveDate,
        time: NaiveTime,
    },

    #[error("booking could not be saved: {0}")]
    Storage(#[from] StorageError),
}
