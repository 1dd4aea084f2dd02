//! Emergency - Ambulance Requests
//!
//! Requests are created from seed data only. The one transition the desk can
//! make is pending → dispatched.

use super::StatusTone;
use crate::constants::MAP_BASE_URL;

/// Lifecycle of an ambulance request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Dispatched,
    Completed,
}

impl RequestStatus {
    /// Translation key under the `emergency` namespace
    pub fn label_key(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "status_pending",
            RequestStatus::Dispatched => "status_dispatched",
            RequestStatus::Completed => "status_completed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            RequestStatus::Pending => StatusTone::Warning,
            RequestStatus::Dispatched => StatusTone::Info,
            RequestStatus::Completed => StatusTone::Success,
        }
    }
}

/// Last known position of the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// External map URL centred on these coordinates
    pub fn map_url(&self) -> String {
        format!("{MAP_BASE_URL}?q={},{}", self.lat, self.lng)
    }
}

/// A single ambulance request as shown on the desk
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyRequest {
    pub id: String,
    pub patient_name: String,
    pub location: String,
    pub status: RequestStatus,
    /// Display string, e.g. "2 mins ago"
    pub timestamp: String,
    /// Display string, e.g. "2.5 km"
    pub distance: String,
    pub contact_number: String,
    pub coordinates: Option<Coordinates>,
}

impl EmergencyRequest {
    pub fn can_dispatch(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn can_track(&self) -> bool {
        self.status == RequestStatus::Dispatched
    }
}

/// Result of a dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The request moved from pending to dispatched
    Dispatched,
    /// No request has this id
    NotFound,
    /// The request exists but is not pending
    NotPending(RequestStatus),
}

impl DispatchOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

/// Ordered list of ambulance requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBoard {
    requests: Vec<EmergencyRequest>,
}

impl RequestBoard {
    pub fn new(requests: Vec<EmergencyRequest>) -> Self {
        Self { requests }
    }

    pub fn requests(&self) -> &[EmergencyRequest] {
        &self.requests
    }

    pub fn get(&self, id: &str) -> Option<&EmergencyRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn count_with(&self, status: RequestStatus) -> usize {
        self.requests.iter().filter(|r| r.status == status).count()
    }

    /// Assign an ambulance to a pending request.
    ///
    /// Only the matching request's status changes; anything else is a no-op.
    pub fn dispatch(&mut self, id: &str) -> DispatchOutcome {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == id) else {
            return DispatchOutcome::NotFound;
        };

        if !request.can_dispatch() {
            return DispatchOutcome::NotPending(request.status);
        }

        request.status = RequestStatus::Dispatched;
        DispatchOutcome::Dispatched
    }

    /// Map URL for a request, if it exists and has coordinates
    pub fn track_url(&self, id: &str) -> Option<String> {
        self.get(id)?.coordinates.map(|c| c.map_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(id: &str, status: RequestStatus, coordinates: Option<Coordinates>) -> EmergencyRequest {
        EmergencyRequest {
            id: id.to_string(),
            patient_name: format!("Patient {id}"),
            location: "1 Test Road".to_string(),
            status,
            timestamp: "1 min ago".to_string(),
            distance: "1.0 km".to_string(),
            contact_number: "+1 000-000-0000".to_string(),
            coordinates,
        }
    }

    fn make_board() -> RequestBoard {
        RequestBoard::new(vec![
            make_request("1", RequestStatus::Pending, Some(Coordinates::new(40.7128, -74.006))),
            make_request("2", RequestStatus::Dispatched, Some(Coordinates::new(40.7142, -74.0064))),
            make_request("3", RequestStatus::Completed, None),
            make_request("4", RequestStatus::Pending, None),
        ])
    }

    #[test]
    fn dispatch_pending_changes_only_that_request() {
        let mut board = make_board();
        let before = board.clone();

        assert_eq!(board.dispatch("1"), DispatchOutcome::Dispatched);

        let updated = board.get("1").expect("request 1 exists");
        let previous = before.get("1").expect("request 1 exists");
        assert_eq!(updated.status, RequestStatus::Dispatched);
        assert_eq!(
            EmergencyRequest { status: previous.status, ..updated.clone() },
            *previous
        );

        for (after, before) in board.requests().iter().zip(before.requests()).skip(1) {
            assert_eq!(after, before);
        }
    }

    #[test]
    fn dispatch_unknown_id_is_noop() {
        let mut board = make_board();
        let before = board.clone();

        assert_eq!(board.dispatch("42"), DispatchOutcome::NotFound);
        assert_eq!(board, before);
    }

    #[test]
    fn dispatch_non_pending_is_noop() {
        let mut board = make_board();
        let before = board.clone();

        assert_eq!(
            board.dispatch("2"),
            DispatchOutcome::NotPending(RequestStatus::Dispatched)
        );
        assert_eq!(
            board.dispatch("3"),
            DispatchOutcome::NotPending(RequestStatus::Completed)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn dispatch_twice_second_is_noop() {
        let mut board = make_board();
        assert!(board.dispatch("4").changed());
        let after_first = board.clone();

        assert!(!board.dispatch("4").changed());
        assert_eq!(board, after_first);
    }

    #[test]
    fn track_url_uses_coordinates() {
        let board = make_board();
        assert_eq!(
            board.track_url("2").as_deref(),
            Some("https://www.google.com/maps?q=40.7142,-74.0064")
        );
        assert_eq!(
            board.track_url("1").as_deref(),
            Some("https://www.google.com/maps?q=40.7128,-74.006")
        );
    }

    #[test]
    fn track_url_missing_coordinates_or_id() {
        let board = make_board();
        assert_eq!(board.track_url("3"), None);
        assert_eq!(board.track_url("missing"), None);
    }

    #[test]
    fn action_visibility_follows_status() {
        let board = make_board();
        let pending = board.get("1").expect("pending request");
        let dispatched = board.get("2").expect("dispatched request");
        let completed = board.get("3").expect("completed request");

        assert!(pending.can_dispatch() && !pending.can_track());
        assert!(!dispatched.can_dispatch() && dispatched.can_track());
        assert!(!completed.can_dispatch() && !completed.can_track());
    }
}
