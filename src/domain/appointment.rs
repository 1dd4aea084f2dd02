//! Appointment - Today's Schedule

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Appointment progress as selected by the receptionist
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl AppointmentStatus {
    /// All statuses in selector order
    pub fn all() -> &'static [AppointmentStatus] {
        &[
            AppointmentStatus::Scheduled,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
        ]
    }

    /// Translation key under the `appointments` namespace
    pub fn label_key(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "status_scheduled",
            AppointmentStatus::InProgress => "status_in_progress",
            AppointmentStatus::Completed => "status_completed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AppointmentStatus::Scheduled => StatusTone::Warning,
            AppointmentStatus::InProgress => StatusTone::Info,
            AppointmentStatus::Completed => StatusTone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub department: String,
    /// Display string, e.g. "2024-03-20"
    pub date: String,
    /// Display string, e.g. "10:00 AM"
    pub time: String,
    pub status: AppointmentStatus,
}

/// Ordered list of appointments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Overwrite an appointment's status, returning the previous one.
    ///
    /// Any transition is accepted, including backward ones. Returns `None`
    /// when no appointment has this id.
    pub fn set_status(&mut self, id: &str, status: AppointmentStatus) -> Option<AppointmentStatus> {
        let appointment = self.appointments.iter_mut().find(|a| a.id == id)?;
        Some(std::mem::replace(&mut appointment.status, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_name: format!("Patient {id}"),
            doctor_name: "Dr. Test".to_string(),
            department: "General".to_string(),
            date: "2024-03-20".to_string(),
            time: "09:00 AM".to_string(),
            status,
        }
    }

    #[test]
    fn set_status_accepts_every_transition() {
        for &from in AppointmentStatus::all() {
            for &to in AppointmentStatus::all() {
                let mut book = AppointmentBook::new(vec![make_appointment("1", from)]);
                assert_eq!(book.set_status("1", to), Some(from));
                assert_eq!(book.get("1").map(|a| a.status), Some(to));
            }
        }
    }

    #[test]
    fn set_status_leaves_other_rows_alone() {
        let mut book = AppointmentBook::new(vec![
            make_appointment("1", AppointmentStatus::Scheduled),
            make_appointment("2", AppointmentStatus::InProgress),
        ]);

        book.set_status("2", AppointmentStatus::Completed);

        assert_eq!(book.get("1"), Some(&make_appointment("1", AppointmentStatus::Scheduled)));
        assert_eq!(book.get("2").map(|a| a.status), Some(AppointmentStatus::Completed));
    }

    #[test]
    fn set_status_unknown_id_is_noop() {
        let mut book = AppointmentBook::new(vec![make_appointment("1", AppointmentStatus::Completed)]);
        let before = book.clone();

        assert_eq!(book.set_status("9", AppointmentStatus::Scheduled), None);
        assert_eq!(book, before);
    }

    #[test]
    fn in_progress_uses_hyphenated_name() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
    }
}
