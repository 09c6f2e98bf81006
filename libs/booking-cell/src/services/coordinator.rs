use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use provider_cell::services::availability;
use provider_cell::services::directory::ProviderDirectory;

use crate::models::{BookingConfirmation, BookingDraft, BookingError, BookingRecord};
use crate::services::gateway::PersistenceGateway;

/// Validates booking drafts against the provider directory and hands the
/// survivors to the persistence gateway. Checks run in a fixed order:
/// missing fields, then provider resolution, then slot membership.
pub struct BookingCoordinator<'a> {
    directory: &'a ProviderDirectory,
    gateway: &'a dyn PersistenceGateway,
}

impl<'a> BookingCoordinator<'a> {
    pub fn new(directory: &'a ProviderDirectory, gateway: &'a dyn PersistenceGateway) -> Self {
        Self { directory, gateway }
    }

    pub fn book(&self, draft: &BookingDraft) -> Result<BookingConfirmation, BookingError> {
        let (provider_id, date, time) = match (draft.provider_id, draft.date, draft.time) {
            (Some(provider_id), Some(date), Some(time)) => (provider_id, date, time),
            _ => return Err(BookingError::MissingField(draft.missing_fields())),
        };

        let provider = self
            .directory
            .find(provider_id)
            .map_err(|_| BookingError::UnknownProvider(provider_id))?;

        if !availability::offered_slots(provider, date).contains(&time) {
            return Err(BookingError::SlotNotOffered {
                provider: provider.name.clone(),
                date,
                time,
            });
        }

        let record = BookingRecord {
            id: Uuid::new_v4(),
            provider_id,
            provider_name: provider.name.clone(),
            date,
            time,
            requester: draft.requester.clone(),
            booked_at: Utc::now(),
        };

        self.gateway.save(&record)?;
        info!(
            "booked {} with {} at {} on {}",
            record.id, record.provider_name, record.time, record.date
        );

        Ok(BookingConfirmation::from_record(&record))
    }
}
