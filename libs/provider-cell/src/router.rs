use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::directory::ProviderDirectory;

pub fn provider_routes(directory: Arc<ProviderDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::list_providers))
        .route("/{provider_id}", get(handlers::get_provider))
        .route("/{provider_id}/availability", get(handlers::get_availability))
        .route("/{provider_id}/slots", get(handlers::get_offered_slots))
        .with_state(directory)
}
