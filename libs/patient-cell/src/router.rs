use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{self, PatientState};

pub fn patient_routes(state: Arc<PatientState>) -> Router {
    Router::new()
        .route("/", post(handlers::register_patient))
        .route("/", get(handlers::list_patients))
        .route("/profile", get(handlers::get_active_profile))
        .route("/contacts", post(handlers::add_contact))
        .route("/contacts", get(handlers::list_contacts))
        .route("/contacts/{contact_id}", delete(handlers::remove_contact))
        .route("/vitals", get(handlers::latest_vitals))
        .route("/vitals", post(handlers::record_vitals))
        .route("/prescriptions", get(handlers::list_prescriptions))
        .route("/reminders", get(handlers::list_reminders))
        .route("/reminders", post(handlers::add_reminder))
        .route("/reminders/{reminder_id}/toggle", patch(handlers::toggle_reminder))
        .route("/reminders/due", get(handlers::due_reminders))
        .with_state(state)
}
