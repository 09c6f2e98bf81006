use std::sync::RwLock;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    MedicationReminder, NewReminderRequest, PatientError, Prescription, ReminderPayload,
    ReminderStatus,
};

/// Delivery channel for medication reminders. This module only assembles
/// the payloads; when and how they reach the patient is the sink's problem.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, payload: &ReminderPayload);
}

pub struct PrescriptionShelf {
    entries: RwLock<Vec<Prescription>>,
}

impl PrescriptionShelf {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(vec![
                Prescription {
                    id: Uuid::new_v4(),
                    medication: "Amoxicillin".to_string(),
                    dosage: "500mg".to_string(),
                    frequency: "3 times daily".to_string(),
                    duration: "7 days".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
                    end_date: NaiveDate::from_ymd_opt(2024, 3, 22).unwrap_or_default(),
                    prescribed_by: "Dr. Sharma".to_string(),
                    instructions: "Take with food".to_string(),
                    remaining_doses: 15,
                },
                Prescription {
                    id: Uuid::new_v4(),
                    medication: "Paracetamol".to_string(),
                    dosage: "650mg".to_string(),
                    frequency: "As needed".to_string(),
                    duration: "5 days".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap_or_default(),
                    end_date: NaiveDate::from_ymd_opt(2024, 3, 21).unwrap_or_default(),
                    prescribed_by: "Dr. Patel".to_string(),
                    instructions: "Take for fever above 100°F".to_string(),
                    remaining_doses: 8,
                },
            ]),
        }
    }

    pub fn list(&self) -> Result<Vec<Prescription>, PatientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PatientError::Storage("prescription lock poisoned".to_string()))?;
        Ok(entries.clone())
    }
}

impl Default for PrescriptionShelf {
    fn default() -> Self {
        Self::new()
    }
}

/// The patient's standing reminder schedule.
pub struct MedicationSchedule {
    reminders: RwLock<Vec<MedicationReminder>>,
}

impl MedicationSchedule {
    pub fn new() -> Self {
        Self {
            reminders: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        let entries = [
            ("Amoxicillin", (8, 0), "Daily", ReminderStatus::Pending),
            ("Vitamin D", (9, 0), "Daily", ReminderStatus::Completed),
            ("Paracetamol", (14, 0), "As needed", ReminderStatus::Pending),
        ]
        .into_iter()
        .filter_map(|(medication, (hour, minute), frequency, status)| {
            Some(MedicationReminder {
                id: Uuid::new_v4(),
                medication: medication.to_string(),
                time: NaiveTime::from_hms_opt(hour, minute, 0)?,
                frequency: frequency.to_string(),
                status,
            })
        })
        .collect();

        Self {
            reminders: RwLock::new(entries),
        }
    }

    pub fn add(&self, request: NewReminderRequest) -> Result<MedicationReminder, PatientError> {
        let medication = request
            .medication
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let time = request
            .time
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| {
                NaiveTime::parse_from_str(v, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(v, "%H:%M:%S"))
                    .ok()
            });

        let mut missing = Vec::new();
        if medication.is_none() {
            missing.push("medication");
        }
        if time.is_none() {
            missing.push("time");
        }
        let (medication, time) = match (medication, time) {
            (Some(medication), Some(time)) => (medication, time),
            _ => return Err(PatientError::MissingField(missing)),
        };

        let reminder = MedicationReminder {
            id: Uuid::new_v4(),
            medication,
            time,
            frequency: request
                .frequency
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "Daily".to_string()),
            status: ReminderStatus::Pending,
        };

        let mut reminders = self
            .reminders
            .write()
            .map_err(|_| PatientError::Storage("reminder lock poisoned".to_string()))?;
        reminders.push(reminder.clone());
        Ok(reminder)
    }

    pub fn list(&self) -> Result<Vec<MedicationReminder>, PatientError> {
        let reminders = self
            .reminders
            .read()
            .map_err(|_| PatientError::Storage("reminder lock poisoned".to_string()))?;
        Ok(reminders.clone())
    }

    /// Flip a reminder between pending and completed.
    pub fn toggle(&self, id: Uuid) -> Result<MedicationReminder, PatientError> {
        let mut reminders = self
            .reminders
            .write()
            .map_err(|_| PatientError::Storage("reminder lock poisoned".to_string()))?;

        let reminder = reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or(PatientError::NotFound(id))?;

        reminder.status = match reminder.status {
            ReminderStatus::Pending => ReminderStatus::Completed,
            ReminderStatus::Completed => ReminderStatus::Pending,
        };
        Ok(reminder.clone())
    }

    /// Payloads for every pending reminder due at or before `now`.
    pub fn due_payloads(&self, now: NaiveTime) -> Result<Vec<ReminderPayload>, PatientError> {
        let reminders = self
            .reminders
            .read()
            .map_err(|_| PatientError::Storage("reminder lock poisoned".to_string()))?;

        Ok(reminders
            .iter()
            .filter(|reminder| reminder.status == ReminderStatus::Pending && reminder.time <= now)
            .map(|reminder| ReminderPayload {
                medication: reminder.medication.clone(),
                time: reminder.time,
                frequency: reminder.frequency.clone(),
            })
            .collect())
    }

    /// Produce the due payloads and hand each to the sink.
    pub fn dispatch_due(
        &self,
        now: NaiveTime,
        sink: &dyn NotificationSink,
    ) -> Result<usize, PatientError> {
        let due = self.due_payloads(now)?;
        for payload in &due {
            debug!("dispatching reminder for {}", payload.medication);
            sink.deliver(payload);
        }
        Ok(due.len())
    }
}

impl Default for MedicationSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::Mutex;

    struct RecordingSink {
        delivered: Mutex<Vec<ReminderPayload>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                delivered: Mutex::new(Vec::new()),
            }
        }
    }

    impl NotificationSink for RecordingSink {
        fn deliver(&self, payload: &ReminderPayload) {
            self.delivered.lock().unwrap().push(payload.clone());
        }
    }

    #[test]
    fn seeded_schedule_matches_the_standing_plan() {
        let schedule = MedicationSchedule::seeded();
        let reminders = schedule.list().unwrap();
        assert_eq!(reminders.len(), 3);
        assert_eq!(reminders[0].medication, "Amoxicillin");
        assert_eq!(reminders[1].status, ReminderStatus::Completed);
    }

    #[test]
    fn add_requires_medication_and_time() {
        let schedule = MedicationSchedule::new();
        let err = schedule
            .add(NewReminderRequest {
                medication: None,
                time: Some("not a time".to_string()),
                frequency: None,
            })
            .unwrap_err();
        assert_matches!(
            err,
            PatientError::MissingField(fields) if fields == vec!["medication", "time"]
        );
    }

    #[test]
    fn toggle_flips_status_both_ways() {
        let schedule = MedicationSchedule::seeded();
        let first = schedule.list().unwrap()[0].clone();

        assert_eq!(schedule.toggle(first.id).unwrap().status, ReminderStatus::Completed);
        assert_eq!(schedule.toggle(first.id).unwrap().status, ReminderStatus::Pending);
    }

    #[test]
    fn only_pending_due_reminders_are_dispatched() {
        let schedule = MedicationSchedule::seeded();
        let sink = RecordingSink::new();

        // 09:30: Amoxicillin (08:00, pending) is due; Vitamin D is already
        // completed; Paracetamol (14:00) is still in the future.
        let mid_morning = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let dispatched = schedule.dispatch_due(mid_morning, &sink).unwrap();

        assert_eq!(dispatched, 1);
        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].medication, "Amoxicillin");
    }

    #[test]
    fn prescriptions_seed_with_remaining_doses() {
        let shelf = PrescriptionShelf::seeded();
        let prescriptions = shelf.list().unwrap();
        assert_eq!(prescriptions.len(), 2);
        assert_eq!(prescriptions[0].remaining_doses, 15);
        assert_eq!(prescriptions[1].prescribed_by, "Dr. Patel");
    }
}
