use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, TriageState};

pub fn triage_routes(state: Arc<TriageState>) -> Router {
    Router::new()
        .route("/messages", get(handlers::get_transcript))
        .route("/messages", post(handlers::post_message))
        .with_state(state)
}
