use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A healthcare professional in the static directory. Availability state is
/// owned by an external scheduling feed; queries never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub qualification: String,
    pub years_experience: i32,
    pub rating: f32,
    pub review_count: i32,
    pub languages: Vec<String>,
    pub consultation_fee_rupees: u32,
    pub is_available: bool,
    pub next_available_at: DateTime<Utc>,
    pub offered_times: Vec<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    pub provider_id: Uuid,
    pub available_now: bool,
    /// Rendered wait, e.g. "2h 5m" or "18m". Absent when available now.
    pub wait: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferedSlotsResponse {
    pub provider_id: Uuid,
    pub provider_name: String,
    pub date: NaiveDate,
    /// Times rendered as "HH:MM", in the provider's declared order.
    pub times: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    #[error("provider not found: {0}")]
    NotFound(Uuid),
}
