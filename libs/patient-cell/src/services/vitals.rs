use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::models::{PatientError, RecordVitalsRequest, VitalsSnapshot};

/// Append-only vitals log. Seeded with a baseline panel so the portal has
/// something to show before the first reading.
pub struct VitalsLog {
    entries: RwLock<Vec<VitalsSnapshot>>,
}

impl VitalsLog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            entries: RwLock::new(vec![VitalsSnapshot {
                systolic: 120,
                diastolic: 80,
                heart_rate_bpm: 72,
                weight_kg: 70.0,
                temperature_celsius: 37.0,
                steps: 8000,
                recorded_at: now,
            }]),
        }
    }

    pub fn record(
        &self,
        request: RecordVitalsRequest,
        now: DateTime<Utc>,
    ) -> Result<VitalsSnapshot, PatientError> {
        let snapshot = VitalsSnapshot {
            systolic: request.systolic,
            diastolic: request.diastolic,
            heart_rate_bpm: request.heart_rate_bpm,
            weight_kg: request.weight_kg,
            temperature_celsius: request.temperature_celsius,
            steps: request.steps,
            recorded_at: now,
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|_| PatientError::Storage("vitals lock poisoned".to_string()))?;
        entries.push(snapshot.clone());
        Ok(snapshot)
    }

    pub fn latest(&self) -> Result<Option<VitalsSnapshot>, PatientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("vitals lock poisoned".to_string()))?;
        Ok(entries.last().cloned())
    }

    pub fn history(&self) -> Result<Vec<VitalsSnapshot>, PatientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("vitals lock poisoned".to_string()))?;
        Ok(entries.clone())
    }
}

impl Default for VitalsLog {
    fn default() -> Self {
        Self::new()
    }
}
