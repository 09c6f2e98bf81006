use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    NewContactRequest, NewReminderRequest, PatientError, RecordVitalsRequest,
    RegisterPatientRequest,
};
use crate::services::contacts::ContactBook;
use crate::services::pharmacy::{MedicationSchedule, PrescriptionShelf};
use crate::services::records::PatientRegistry;
use crate::services::vitals::VitalsLog;

pub struct PatientState {
    pub registry: PatientRegistry,
    pub contacts: ContactBook,
    pub vitals: VitalsLog,
    pub prescriptions: PrescriptionShelf,
    pub schedule: MedicationSchedule,
}

fn map_patient_error(err: PatientError) -> AppError {
    match err {
        PatientError::MissingField(_) => AppError::ValidationError(err.to_string()),
        PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
        PatientError::Storage(_) => AppError::Storage(err.to_string()),
    }
}

#[axum::debug_handler]
pub async fn register_patient(
    State(state): State<Arc<PatientState>>,
    Json(request): Json<RegisterPatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = state
        .registry
        .register(request)
        .map_err(map_patient_error)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let patients = state.registry.list().map_err(map_patient_error)?;

    let total = patients.len();
    Ok(Json(json!({
        "patients": patients,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_active_profile(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let profile = state
        .registry
        .current()
        .map_err(map_patient_error)?
        .ok_or_else(|| AppError::NotFound("no active patient profile".to_string()))?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn add_contact(
    State(state): State<Arc<PatientState>>,
    Json(request): Json<NewContactRequest>,
) -> Result<Json<Value>, AppError> {
    let contact = state.contacts.add(request).map_err(map_patient_error)?;
    Ok(Json(json!(contact)))
}

#[axum::debug_handler]
pub async fn list_contacts(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let contacts = state.contacts.list().map_err(map_patient_error)?;

    let total = contacts.len();
    Ok(Json(json!({
        "contacts": contacts,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn remove_contact(
    State(state): State<Arc<PatientState>>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state
        .contacts
        .remove(contact_id)
        .map_err(map_patient_error)?;

    Ok(Json(json!({ "removed": contact_id })))
}

#[axum::debug_handler]
pub async fn latest_vitals(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let latest = state
        .vitals
        .latest()
        .map_err(map_patient_error)?
        .ok_or_else(|| AppError::NotFound("no vitals recorded yet".to_string()))?;

    Ok(Json(json!(latest)))
}

#[axum::debug_handler]
pub async fn record_vitals(
    State(state): State<Arc<PatientState>>,
    Json(request): Json<RecordVitalsRequest>,
) -> Result<Json<Value>, AppError> {
    let snapshot = state
        .vitals
        .record(request, Utc::now())
        .map_err(map_patient_error)?;

    Ok(Json(json!(snapshot)))
}

#[axum::debug_handler]
pub async fn list_prescriptions(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let prescriptions = state.prescriptions.list().map_err(map_patient_error)?;

    let total = prescriptions.len();
    Ok(Json(json!({
        "prescriptions": prescriptions,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn list_reminders(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let reminders = state.schedule.list().map_err(map_patient_error)?;

    let total = reminders.len();
    Ok(Json(json!({
        "reminders": reminders,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn add_reminder(
    State(state): State<Arc<PatientState>>,
    Json(request): Json<NewReminderRequest>,
) -> Result<Json<Value>, AppError> {
    let reminder = state.schedule.add(request).map_err(map_patient_error)?;
    Ok(Json(json!(reminder)))
}

#[axum::debug_handler]
pub async fn toggle_reminder(
    State(state): State<Arc<PatientState>>,
    Path(reminder_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let reminder = state
        .schedule
        .toggle(reminder_id)
        .map_err(map_patient_error)?;

    Ok(Json(json!(reminder)))
}

#[axum::debug_handler]
pub async fn due_reminders(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Value>, AppError> {
    let due = state
        .schedule
        .due_payloads(Utc::now().time())
        .map_err(map_patient_error)?;

    let total = due.len();
    Ok(Json(json!({
        "due": due,
        "total": total
    })))
}
