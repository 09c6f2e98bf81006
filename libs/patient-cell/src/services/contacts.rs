use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{EmergencyContact, NewContactRequest, PatientError};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Emergency contact book seeded with the household defaults.
pub struct ContactBook {
    entries: RwLock<Vec<EmergencyContact>>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(vec![
                EmergencyContact {
                    id: Uuid::new_v4(),
                    name: "John Doe".to_string(),
                    relationship: Some("Spouse".to_string()),
                    phone: "+91 98765 43210".to_string(),
                    address: Some("123 Main St, City".to_string()),
                },
                EmergencyContact {
                    id: Uuid::new_v4(),
                    name: "Jane Smith".to_string(),
                    relationship: Some("Family Doctor".to_string()),
                    phone: "+91 98765 43211".to_string(),
                    address: Some("City Hospital".to_string()),
                },
            ]),
        }
    }

    pub fn add(&self, request: NewContactRequest) -> Result<EmergencyContact, PatientError> {
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

        let contact = EmergencyContact {
            id: Uuid::new_v4(),
            name,
            relationship: non_blank(request.relationship),
            phone,
            address: non_blank(request.address),
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|_| PatientError::Storage("contact lock poisoned".to_string()))?;
        entries.push(contact.clone());
        Ok(contact)
    }

    pub fn list(&self) -> Result<Vec<EmergencyContact>, PatientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("contact lock poisoned".to_string()))?;
        Ok(entries.clone())
    }

    pub fn remove(&self, id: Uuid) -> Result<(), PatientError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PatientError::Storage("contact lock poisoned".to_string()))?;

        let before = entries.len();
        entries.retain(|contact| contact.id != id);
        if entries.len() == before {
            return Err(PatientError::NotFound(id));
        }
        Ok(())
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}
