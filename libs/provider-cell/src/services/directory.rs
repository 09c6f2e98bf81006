use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::debug;
use uuid::{uuid, Uuid};

use crate::models::{DirectoryError, Provider};

pub const DR_SHARMA_ID: Uuid = uuid!("5f6c0d5e-2e83-4a6b-9d2a-1c5a2e9b7f01");
pub const DR_PATEL_ID: Uuid = uuid!("5f6c0d5e-2e83-4a6b-9d2a-1c5a2e9b7f02");
pub const DR_SINGH_ID: Uuid = uuid!("5f6c0d5e-2e83-4a6b-9d2a-1c5a2e9b7f03");
pub const DR_GUPTA_ID: Uuid = uuid!("5f6c0d5e-2e83-4a6b-9d2a-1c5a2e9b7f04");

/// Static provider catalog. Read-only: availability changes come from an
/// external scheduling feed, never from lookups.
pub struct ProviderDirectory {
    providers: Vec<Provider>,
}

impl ProviderDirectory {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Seed the directory with the standing telehealth panel. Providers that
    /// are not immediately available get a `next_available_at` strictly after
    /// `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let providers = vec![
            Provider {
                id: DR_SHARMA_ID,
                name: "Dr. Sharma".to_string(),
                specialty: "Cardiologist".to_string(),
                qualification: "MD, DM Cardiology".to_string(),
                years_experience: 15,
                rating: 4.8,
                review_count: 234,
                languages: vec!["English".to_string(), "Hindi".to_string()],
                consultation_fee_rupees: 800,
                is_available: true,
                next_available_at: now,
                offered_times: daily_times(&[(9, 0), (11, 0), (14, 0)]),
            },
            Provider {
                id: DR_PATEL_ID,
                name: "Dr. Patel".to_string(),
                specialty: "Pediatrician".to_string(),
                qualification: "MBBS, MD Pediatrics".to_string(),
                years_experience: 12,
                rating: 4.9,
                review_count: 189,
                languages: vec![
                    "English".to_string(),
                    "Gujarati".to_string(),
                    "Hindi".to_string(),
                ],
                consultation_fee_rupees: 600,
                is_available: false,
                next_available_at: now + Duration::minutes(20),
                offered_times: daily_times(&[(10, 0), (13, 0), (15, 0)]),
            },
            Provider {
                id: DR_SINGH_ID,
                name: "Dr. Singh".to_string(),
                specialty: "Dermatologist".to_string(),
                qualification: "MBBS, MD Dermatology".to_string(),
                years_experience: 8,
                rating: 4.7,
                review_count: 156,
                languages: vec![
                    "English".to_string(),
                    "Punjabi".to_string(),
                    "Hindi".to_string(),
                ],
                consultation_fee_rupees: 700,
                is_available: false,
                next_available_at: now + Duration::hours(11),
                offered_times: daily_times(&[(9, 30), (12, 0), (16, 0)]),
            },
            Provider {
                id: DR_GUPTA_ID,
                name: "Dr. Gupta".to_string(),
                specialty: "General Physician".to_string(),
                qualification: "MBBS, MD Internal Medicine".to_string(),
                years_experience: 10,
                rating: 4.6,
                review_count: 201,
                languages: vec![
                    "English".to_string(),
                    "Hindi".to_string(),
                    "Bengali".to_string(),
                ],
                consultation_fee_rupees: 500,
                is_available: true,
                next_available_at: now,
                offered_times: daily_times(&[(10, 30), (13, 30), (17, 0)]),
            },
        ];

        debug!("seeded provider directory with {} entries", providers.len());
        Self { providers }
    }

    /// All providers in insertion order.
    pub fn list(&self) -> &[Provider] {
        &self.providers
    }

    pub fn find(&self, id: Uuid) -> Result<&Provider, DirectoryError> {
        self.providers
            .iter()
            .find(|provider| provider.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }
}

fn daily_times(times: &[(u32, u32)]) -> Vec<NaiveTime> {
    times
        .iter()
        .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_preserves_insertion_order() {
        let directory = ProviderDirectory::seeded(Utc::now());
        let names: Vec<&str> = directory
            .list()
            .iter()
            .map(|provider| provider.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Dr. Sharma", "Dr. Patel", "Dr. Singh", "Dr. Gupta"]
        );
    }

    #[test]
    fn find_resolves_known_ids() {
        let directory = ProviderDirectory::seeded(Utc::now());
        let singh = directory.find(DR_SINGH_ID).unwrap();
        assert_eq!(singh.name, "Dr. Singh");
        assert_eq!(singh.specialty, "Dermatologist");
    }

    #[test]
    fn find_rejects_unknown_ids() {
        let directory = ProviderDirectory::seeded(Utc::now());
        let missing = Uuid::new_v4();
        let err = directory.find(missing).unwrap_err();
        assert_eq!(err, DirectoryError::NotFound(missing));
    }

    #[test]
    fn unavailable_seeds_have_future_next_available() {
        let now = Utc::now();
        let directory = ProviderDirectory::seeded(now);
        for provider in directory.list() {
            if !provider.is_available {
                assert!(provider.next_available_at > now, "{}", provider.name);
            }
        }
    }
}
