use std::sync::{Arc, RwLock};

use axum::{routing::get, Router};
use chrono::Utc;

use booking_cell::handlers::BookingState;
use booking_cell::router::booking_routes;
use booking_cell::services::gateway::InMemoryBookingStore;
use patient_cell::handlers::PatientState;
use patient_cell::router::patient_routes;
use patient_cell::services::contacts::ContactBook;
use patient_cell::services::pharmacy::{MedicationSchedule, PrescriptionShelf};
use patient_cell::services::records::PatientRegistry;
use patient_cell::services::vitals::VitalsLog;
use provider_cell::router::provider_routes;
use provider_cell::services::directory::ProviderDirectory;
use shared_config::AppConfig;
use triage_cell::handlers::TriageState;
use triage_cell::router::triage_routes;
use triage_cell::services::engine::TriageRuleEngine;
use triage_cell::services::transcript::ChatTranscript;

use crate::identity::RegistryIdentity;

pub fn create_router(config: &AppConfig) -> Router {
    let now = Utc::now();

    let directory = Arc::new(ProviderDirectory::seeded(now));

    let patients = Arc::new(PatientState {
        registry: PatientRegistry::new(),
        contacts: ContactBook::seeded(),
        vitals: VitalsLog::seeded(now),
        prescriptions: PrescriptionShelf::seeded(),
        schedule: MedicationSchedule::seeded(),
    });

    let triage = Arc::new(TriageState {
        engine: TriageRuleEngine::with_default_rules(&config.emergency_hotline),
        transcript: RwLock::new(ChatTranscript::with_greeting(now)),
    });

    let bookings = Arc::new(BookingState {
        directory: Arc::clone(&directory),
        gateway: Arc::new(InMemoryBookingStore::new()),
        identity: Arc::new(RegistryIdentity::new(Arc::clone(&patients))),
    });

    Router::new()
        .route("/", get(|| async { "Rural Health Connect API is running!" }))
        .nest("/api/providers", provider_routes(directory))
        .nest("/api/triage", triage_routes(triage))
        .nest("/api/bookings", booking_routes(bookings))
        .nest("/api/patients", patient_routes(patients))
}
