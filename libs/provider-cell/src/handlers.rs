use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{AvailabilityStatus, OfferedSlotsResponse};
use crate::services::availability;
use crate::services::directory::ProviderDirectory;

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn list_providers(
    State(directory): State<Arc<ProviderDirectory>>,
) -> Result<Json<Value>, AppError> {
    let providers = directory.list();

    Ok(Json(json!({
        "providers": providers,
        "total": providers.len()
    })))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(directory): State<Arc<ProviderDirectory>>,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let provider = directory
        .find(provider_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(provider)))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(directory): State<Arc<ProviderDirectory>>,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let provider = directory
        .find(provider_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    let available_now = availability::is_available_now(provider);
    let wait = if available_now {
        None
    } else {
        let wait = availability::time_until_available(provider, Utc::now());
        Some(availability::format_wait(wait))
    };

    let status = AvailabilityStatus {
        provider_id,
        available_now,
        wait,
    };
    Ok(Json(json!(status)))
}

#[axum::debug_handler]
pub async fn get_offered_slots(
    State(directory): State<Arc<ProviderDirectory>>,
    Path(provider_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let provider = directory
        .find(provider_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    let times = availability::offered_slots(provider, query.date)
        .iter()
        .map(|time| time.format("%H:%M").to_string())
        .collect();

    let slots = OfferedSlotsResponse {
        provider_id,
        provider_name: provider.name.clone(),
        date: query.date,
        times,
    };
    Ok(Json(json!(slots)))
}
