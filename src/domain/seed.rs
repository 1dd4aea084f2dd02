//! Seed Data
//!
//! Fixed, fictional sample data loaded at startup. Nothing here is read from
//! or written to disk.

use super::{
    Appointment, AppointmentBook, AppointmentStatus, BedPool, BedStatus, Coordinates,
    EmergencyRequest, RequestBoard, RequestStatus,
};

pub fn emergency_requests() -> RequestBoard {
    RequestBoard::new(vec![
        EmergencyRequest {
            id: "1".to_string(),
            patient_name: "John Doe".to_string(),
            location: "123 Emergency St".to_string(),
            status: RequestStatus::Pending,
            timestamp: "2 mins ago".to_string(),
            distance: "2.5 km".to_string(),
            contact_number: "+1 234-567-8900".to_string(),
            coordinates: Some(Coordinates::new(40.7128, -74.0060)),
        },
        EmergencyRequest {
            id: "2".to_string(),
            patient_name: "Jane Smith".to_string(),
            location: "456 Medical Ave".to_string(),
            status: RequestStatus::Dispatched,
            timestamp: "5 mins ago".to_string(),
            distance: "3.8 km".to_string(),
            contact_number: "+1 234-567-8901".to_string(),
            coordinates: Some(Coordinates::new(40.7142, -74.0064)),
        },
    ])
}

pub fn appointments() -> AppointmentBook {
    AppointmentBook::new(vec![
        Appointment {
            id: "1".to_string(),
            patient_name: "Alice Johnson".to_string(),
            doctor_name: "Dr. Smith".to_string(),
            department: "Cardiology".to_string(),
            date: "2024-03-20".to_string(),
            time: "10:00 AM".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "2".to_string(),
            patient_name: "Bob Wilson".to_string(),
            doctor_name: "Dr. Brown".to_string(),
            department: "Orthopedics".to_string(),
            date: "2024-03-20".to_string(),
            time: "11:30 AM".to_string(),
            status: AppointmentStatus::InProgress,
        },
    ])
}

/// 100 beds: ICU 20 (5 free), Emergency 15 (3 free), General 65 (17 free)
pub fn bed_status() -> BedStatus {
    BedStatus::from_pools(BedPool::new(20, 5), BedPool::new(15, 3), BedPool::new(65, 17))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_front_desk_sample() {
        let requests = emergency_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests.count_with(RequestStatus::Pending), 1);
        assert!(requests.requests().iter().all(|r| r.coordinates.is_some()));

        let book = appointments();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("2").map(|a| a.status), Some(AppointmentStatus::InProgress));

        let beds = bed_status();
        assert_eq!((beds.total(), beds.available(), beds.occupied()), (100, 25, 75));
    }
}
