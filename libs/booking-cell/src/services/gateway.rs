use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{BookingConfirmation, BookingRecord, StorageError};

/// Where validated bookings go. Implementations own durability; the
/// coordinator calls `save` exactly once per validated booking and surfaces
/// failures verbatim without retrying.
pub trait PersistenceGateway: Send + Sync {
    fn save(&self, record: &BookingRecord) -> Result<Uuid, StorageError>;

    fn list_upcoming(&self, requester_id: Uuid) -> Result<Vec<BookingConfirmation>, StorageError>;
}

/// Process-local booking ledger. No slot-exclusivity check: the same slot
/// can be recorded more than once, matching the upstream data model.
pub struct InMemoryBookingStore {
    entries: RwLock<Vec<BookingRecord>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceGateway for InMemoryBookingStore {
    fn save(&self, record: &BookingRecord) -> Result<Uuid, StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("ledger lock poisoned".to_string()))?;
        entries.push(record.clone());
        Ok(record.id)
    }

    fn list_upcoming(&self, requester_id: Uuid) -> Result<Vec<BookingConfirmation>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("ledger lock poisoned".to_string()))?;

        let today = Utc::now().date_naive();
        Ok(entries
            .iter()
            .filter(|record| record.requester.id == requester_id && record.date >= today)
            .map(BookingConfirmation::from_record)
            .collect())
    }
}
