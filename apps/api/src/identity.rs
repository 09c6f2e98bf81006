use std::sync::Arc;

use booking_cell::models::Requester;
use booking_cell::services::identity::IdentityProvider;
use patient_cell::handlers::PatientState;

/// Bridges the patient register's active profile into the booking layer's
/// identity seam.
pub struct RegistryIdentity {
    patients: Arc<PatientState>,
}

impl RegistryIdentity {
    pub fn new(patients: Arc<PatientState>) -> Self {
        Self { patients }
    }
}

impl IdentityProvider for RegistryIdentity {
    fn current(&self) -> Option<Requester> {
        self.patients
            .registry
            .current()
            .ok()
            .flatten()
            .map(|patient| Requester {
                id: patient.id,
                name: patient.name,
            })
    }
}
