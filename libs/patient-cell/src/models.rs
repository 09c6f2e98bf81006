use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactRequest {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A point-in-time vitals reading. The log keeps every snapshot; nothing is
/// edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsSnapshot {
    pub systolic: i32,
    pub diastolic: i32,
    pub heart_rate_bpm: i32,
    pub weight_kg: f32,
    pub temperature_celsius: f32,
    pub steps: i32,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordVitalsRequest {
    pub systolic: i32,
    pub diastolic: i32,
    pub heart_rate_bpm: i32,
    pub weight_kg: f32,
    pub temperature_celsius: f32,
    pub steps: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prescribed_by: String,
    pub instructions: String,
    pub remaining_doses: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Completed,
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderStatus::Pending => write!(f, "pending"),
            ReminderStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationReminder {
    pub id: Uuid,
    pub medication: String,
    pub time: NaiveTime,
    pub frequency: String,
    pub status: ReminderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReminderRequest {
    pub medication: Option<String>,
    pub time: Option<String>,
    pub frequency: Option<String>,
}

/// Everything a delivery channel needs to send one reminder. Producing this
/// is where this module stops; scheduling and delivery belong to the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub medication: String,
    pub time: NaiveTime,
    pub frequency: String,
}

#[derive(Error, Debug)]
pub enum PatientError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingField(Vec<&'static str>),

    #[error("record not found: {0}")]
    NotFound(Uuid),

    #[error("record store unavailable: {0}")]
    Storage(String),
}
