use std::sync::RwLock;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::models::{Patient, PatientError, RegisterPatientRequest};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// In-process patient register. The most recently registered patient is the
/// active profile, mirroring a single-user portal session.
pub struct PatientRegistry {
    entries: RwLock<Vec<Patient>>,
    active: RwLock<Option<Uuid>>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            active: RwLock::new(None),
        }
    }

    pub fn register(&self, request: RegisterPatientRequest) -> Result<Patient, PatientError> {
        let name = non_blank(request.name);
        let phone = non_blank(request.phone);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if phone.is_none() {
            missing.push("phone");
        }
        let (name, phone) = match (name, phone) {
            (Some(name), Some(phone)) => (name, phone),
            _ => return Err(PatientError::MissingField(missing)),
        };

        let patient = Patient {
            id: Uuid::new_v4(),
            name,
            age: request.age,
            gender: non_blank(request.gender),
            phone,
            address: non_blank(request.address),
            created_at: Utc::now(),
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|_| PatientError::Storage("register lock poisoned".to_string()))?;
        entries.push(patient.clone());

        let mut active = self
            .active
            .write()
            .map_err(|_| PatientError::Storage("session lock poisoned".to_string()))?;
        *active = Some(patient.id);

        info!("registered patient {}", patient.id);
        Ok(patient)
    }

    pub fn list(&self) -> Result<Vec<Patient>, PatientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("register lock poisoned".to_string()))?;
        Ok(entries.clone())
    }

    /// The active profile, if anyone has onboarded.
    pub fn current(&self) -> Result<Option<Patient>, PatientError> {
        let active = self
            .active
            .read()
            .map_err(|_| PatientError::Storage("session lock poisoned".to_string()))?;
        let Some(id) = *active else {
            return Ok(None);
        };

        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("register lock poisoned".to_string()))?;
        Ok(entries.iter().find(|patient| patient.id == id).cloned())
    }
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(name: Option<&str>, phone: Option<&str>) -> RegisterPatientRequest {
        RegisterPatientRequest {
            name: name.map(str::to_string),
            age: Some(34),
            gender: Some("female".to_string()),
            phone: phone.map(str::to_string),
            address: Some("123 Main St".to_string()),
        }
    }

    #[test]
    fn registration_requires_name_and_phone() {
        let registry = PatientRegistry::new();
        let err = registry.register(request(None, Some("  "))).unwrap_err();
        assert_matches!(
            err,
            PatientError::MissingField(fields) if fields == vec!["name", "phone"]
        );
    }

    #[test]
    fn registration_activates_the_profile() {
        let registry = PatientRegistry::new();
        assert!(registry.current().unwrap().is_none());

        let patient = registry
            .register(request(Some("Asha"), Some("+91 98765 43210")))
            .unwrap();

        let current = registry.current().unwrap().unwrap();
        assert_eq!(current.id, patient.id);
        assert_eq!(current.name, "Asha");
    }

    #[test]
    fn latest_registration_wins_the_session() {
        let registry = PatientRegistry::new();
        registry
            .register(request(Some("Asha"), Some("+91 98765 43210")))
            .unwrap();
        registry
            .register(request(Some("Ravi"), Some("+91 98765 43211")))
            .unwrap();

        assert_eq!(registry.current().unwrap().unwrap().name, "Ravi");
        assert_eq!(registry.list().unwrap().len(), 2);
    }
}
