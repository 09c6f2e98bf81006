use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, BookingState};

pub fn booking_routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_booking))
        .route("/", get(handlers::list_upcoming_bookings))
        .with_state(state)
}
