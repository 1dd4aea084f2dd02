//! Desk State
//!
//! The single in-memory store behind the three desk views. It is seeded at
//! startup and discarded on exit.
//!
//! Every mutation has a plain `apply_*` form that returns what happened, and
//! an entity form that wraps it with logging and `cx.notify()`:
//!
//! ```text
//! UI Action → DeskState::<action>(cx) → apply_* (domain transform) → notify → UI Refresh
//! ```

use crate::constants::ACTIVITY_LOG_CAPACITY;
use crate::domain::{
    AdjustOutcome, AppointmentBook, AppointmentStatus, BedCategory, BedStatus, DispatchOutcome,
    RequestBoard, seed,
};
use crate::states::{ActivityKind, ActivityLog, UIEvent};
use gpui::{Context, EventEmitter};
use tracing::{debug, info};

/// Emergency requests, appointments and bed counters
#[derive(Debug, Clone)]
pub struct DeskState {
    requests: RequestBoard,
    appointments: AppointmentBook,
    beds: BedStatus,
    activity: ActivityLog,
}

impl EventEmitter<UIEvent> for DeskState {}

impl DeskState {
    pub fn new(requests: RequestBoard, appointments: AppointmentBook, beds: BedStatus) -> Self {
        Self {
            requests,
            appointments,
            beds,
            activity: ActivityLog::new(ACTIVITY_LOG_CAPACITY),
        }
    }

    /// Desk loaded with the fixed sample data
    pub fn seeded() -> Self {
        Self::new(seed::emergency_requests(), seed::appointments(), seed::bed_status())
    }

    // ==================== Getters ====================

    pub fn requests(&self) -> &RequestBoard {
        &self.requests
    }

    pub fn appointments(&self) -> &AppointmentBook {
        &self.appointments
    }

    pub fn beds(&self) -> &BedStatus {
        &self.beds
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    // ==================== Transforms ====================

    /// Dispatch an ambulance to a pending request
    pub fn apply_dispatch(&mut self, request_id: &str) -> DispatchOutcome {
        let outcome = self.requests.dispatch(request_id);
        match outcome {
            DispatchOutcome::Dispatched => {
                let patient = self
                    .requests
                    .get(request_id)
                    .map(|r| r.patient_name.clone())
                    .unwrap_or_default();
                info!(request_id, patient = %patient, "Ambulance dispatched");
                self.activity.record(ActivityKind::Dispatched { patient });
            }
            DispatchOutcome::NotFound => {
                debug!(request_id, "Dispatch ignored: unknown request");
            }
            DispatchOutcome::NotPending(status) => {
                debug!(request_id, status = ?status, "Dispatch ignored: request not pending");
            }
        }
        outcome
    }

    /// Overwrite an appointment's status; returns the previous status
    pub fn apply_appointment_status(
        &mut self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> Option<AppointmentStatus> {
        let Some(previous) = self.appointments.set_status(appointment_id, status) else {
            debug!(appointment_id, "Status change ignored: unknown appointment");
            return None;
        };

        if previous == status {
            debug!(appointment_id, status = ?status, "Status change ignored: unchanged");
        } else {
            info!(appointment_id, from = ?previous, to = ?status, "Appointment status set");
            let patient = self
                .appointments
                .get(appointment_id)
                .map(|a| a.patient_name.clone())
                .unwrap_or_default();
            self.activity.record(ActivityKind::AppointmentStatusChanged {
                patient,
                from: previous,
                to: status,
            });
        }
        Some(previous)
    }

    /// Move a bed category's availability, clamped to its pool
    pub fn apply_bed_adjustment(&mut self, category: BedCategory, delta: i32) -> AdjustOutcome {
        let outcome = self.beds.adjust(category, delta);
        if outcome.changed() {
            let pool = self.beds.pool(category);
            info!(
                category = ?category,
                delta,
                available = pool.available,
                facility_available = self.beds.available(),
                facility_occupied = self.beds.occupied(),
                "Bed availability adjusted"
            );
            self.activity.record(ActivityKind::BedsAdjusted {
                category,
                available: pool.available,
                total: pool.total,
            });
        } else {
            debug!(
                category = ?category,
                delta,
                available = outcome.current,
                clamped = outcome.clamped(delta),
                "Bed adjustment had no effect"
            );
        }
        outcome
    }

    /// Map URL for a request with known coordinates
    pub fn track_url(&self, request_id: &str) -> Option<String> {
        let url = self.requests.track_url(request_id);
        if url.is_none() {
            debug!(request_id, "Track ignored: no coordinates");
        }
        url
    }

    // ==================== Entity Actions ====================

    pub fn dispatch(&mut self, request_id: &str, cx: &mut Context<Self>) {
        if self.apply_dispatch(request_id).changed() {
            cx.notify();
        }
    }

    pub fn track(&mut self, request_id: &str, cx: &mut Context<Self>) {
        if let Some(url) = self.track_url(request_id) {
            info!(request_id, url = %url, "Opening map");
            cx.emit(UIEvent::OpenMap {
                request_id: request_id.into(),
                url: url.into(),
            });
        }
    }

    pub fn set_appointment_status(
        &mut self,
        appointment_id: &str,
        status: AppointmentStatus,
        cx: &mut Context<Self>,
    ) {
        if self
            .apply_appointment_status(appointment_id, status)
            .is_some_and(|previous| previous != status)
        {
            cx.notify();
        }
    }

    pub fn adjust_beds(&mut self, category: BedCategory, delta: i32, cx: &mut Context<Self>) {
        if self.apply_bed_adjustment(category, delta).changed() {
            cx.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestStatus;

    #[test]
    fn dispatch_records_activity() {
        let mut desk = DeskState::seeded();

        assert_eq!(desk.apply_dispatch("1"), DispatchOutcome::Dispatched);
        assert_eq!(
            desk.requests().get("1").map(|r| r.status),
            Some(RequestStatus::Dispatched)
        );
        assert_eq!(
            desk.activity().latest().map(|e| e.kind.clone()),
            Some(ActivityKind::Dispatched {
                patient: "John Doe".to_string()
            })
        );
    }

    #[test]
    fn ignored_dispatch_records_nothing() {
        let mut desk = DeskState::seeded();
        let before = desk.requests().clone();

        assert!(!desk.apply_dispatch("2").changed());
        assert!(!desk.apply_dispatch("missing").changed());

        assert_eq!(desk.requests(), &before);
        assert!(desk.activity().is_empty());
    }

    #[test]
    fn appointment_status_can_move_backwards() {
        let mut desk = DeskState::seeded();

        assert_eq!(
            desk.apply_appointment_status("2", AppointmentStatus::Completed),
            Some(AppointmentStatus::InProgress)
        );
        assert_eq!(
            desk.apply_appointment_status("2", AppointmentStatus::Scheduled),
            Some(AppointmentStatus::Completed)
        );
        assert_eq!(
            desk.appointments().get("2").map(|a| a.status),
            Some(AppointmentStatus::Scheduled)
        );
        assert_eq!(desk.activity().len(), 2);
    }

    #[test]
    fn same_status_is_accepted_without_activity() {
        let mut desk = DeskState::seeded();
        assert_eq!(
            desk.apply_appointment_status("1", AppointmentStatus::Scheduled),
            Some(AppointmentStatus::Scheduled)
        );
        assert!(desk.activity().is_empty());
    }

    #[test]
    fn unknown_appointment_is_ignored() {
        let mut desk = DeskState::seeded();
        let before = desk.appointments().clone();
        assert_eq!(desk.apply_appointment_status("7", AppointmentStatus::Completed), None);
        assert_eq!(desk.appointments(), &before);
    }

    #[test]
    fn icu_decrements_stop_at_zero() {
        let mut desk = DeskState::seeded();
        for _ in 0..5 {
            assert!(desk.apply_bed_adjustment(BedCategory::Icu, -1).changed());
        }

        let sixth = desk.apply_bed_adjustment(BedCategory::Icu, -1);
        assert!(!sixth.changed());
        assert_eq!(desk.beds().pool(BedCategory::Icu).available, 0);
        assert_eq!(desk.beds().available(), 20);
        assert_eq!(desk.beds().occupied(), 80);
        assert_eq!(desk.activity().len(), 5);
    }

    #[test]
    fn track_url_for_seeded_requests() {
        let desk = DeskState::seeded();
        assert_eq!(
            desk.track_url("2").as_deref(),
            Some("https://www.google.com/maps?q=40.7142,-74.0064")
        );
        assert_eq!(desk.track_url("9"), None);
    }
}
