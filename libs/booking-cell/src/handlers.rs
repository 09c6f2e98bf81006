use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use provider_cell::services::directory::ProviderDirectory;
use shared_models::error::AppError;

use crate::models::{BookingDraft, BookingError};
use crate::services::coordinator::BookingCoordinator;
use crate::services::gateway::PersistenceGateway;
use crate::services::identity::IdentityProvider;

pub struct BookingState {
    pub directory: Arc<ProviderDirectory>,
    pub gateway: Arc<dyn PersistenceGateway>,
    pub identity: Arc<dyn IdentityProvider>,
}

/// Raw submission: fields arrive as optional strings so that absent and
/// blank values both surface as validation failures instead of decode
/// errors.
#[derive(Debug, Deserialize)]
pub struct BookingSubmission {
    pub provider_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_provider_id(raw: Option<String>) -> Result<Option<Uuid>, AppError> {
    non_blank(raw)
        .map(|v| {
            Uuid::parse_str(v.trim())
                .map_err(|_| AppError::BadRequest("provider_id is not a valid id".to_string()))
        })
        .transpose()
}

fn parse_date(raw: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    non_blank(raw)
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest("date must be YYYY-MM-DD".to_string()))
        })
        .transpose()
}

fn parse_time(raw: Option<String>) -> Result<Option<NaiveTime>, AppError> {
    non_blank(raw)
        .map(|v| {
            let trimmed = v.trim();
            NaiveTime::parse_from_str(trimmed, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
                .map_err(|_| AppError::BadRequest("time must be HH:MM".to_string()))
        })
        .transpose()
}

fn map_booking_error(err: BookingError) -> AppError {
    match err {
        BookingError::MissingField(_) => AppError::ValidationError(err.to_string()),
        BookingError::UnknownProvider(_) => AppError::NotFound(err.to_string()),
        BookingError::SlotNotOffered { .. } => AppError::ValidationError(err.to_string()),
        BookingError::Storage(_) => AppError::Storage(err.to_string()),
    }
}

#[axum::debug_handler]
pub async fn submit_booking(
    State(state): State<Arc<BookingState>>,
    Json(submission): Json<BookingSubmission>,
) -> Result<Json<Value>, AppError> {
    let requester = state
        .identity
        .current()
        .ok_or_else(|| AppError::BadRequest("no active patient profile".to_string()))?;

    let draft = BookingDraft {
        provider_id: parse_provider_id(submission.provider_id)?,
        date: parse_date(submission.date)?,
        time: parse_time(submission.time)?,
        requester,
    };

    let coordinator = BookingCoordinator::new(&state.directory, state.gateway.as_ref());
    let confirmation = coordinator.book(&draft).map_err(map_booking_error)?;

    Ok(Json(json!(confirmation)))
}

#[axum::debug_handler]
pub async fn list_upcoming_bookings(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Value>, AppError> {
    let requester = state
        .identity
        .current()
        .ok_or_else(|| AppError::BadRequest("no active patient profile".to_string()))?;

    let upcoming = state
        .gateway
        .list_upcoming(requester.id)
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let total = upcoming.len();
    Ok(Json(json!({
        "bookings": upcoming,
        "total": total
    })))
}
