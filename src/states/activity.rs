//! Activity Log - Recent Desk Changes with Ring Buffer
//!
//! Read by the status bar only. Entries never feed back into desk data.

use crate::domain::{AppointmentStatus, BedCategory};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// What happened at the desk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    /// An ambulance was dispatched
    Dispatched { patient: String },
    /// An appointment's status was changed
    AppointmentStatusChanged {
        patient: String,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    /// A bed category's availability moved
    BedsAdjusted {
        category: BedCategory,
        available: u32,
        total: u32,
    },
}

/// A single activity entry
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: u64,
    pub kind: ActivityKind,
    pub timestamp: DateTime<Local>,
}

/// Bounded log of desk changes; the oldest entry is dropped when full
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
    next_id: u64,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// Record an activity with the current local time
    pub fn record(&mut self, kind: ActivityKind) {
        self.push(kind, Local::now());
    }

    pub fn push(&mut self, kind: ActivityKind, timestamp: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }

        let entry = ActivityEntry {
            id: self.next_id,
            kind,
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &VecDeque<ActivityEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(patient: &str) -> ActivityKind {
        ActivityKind::Dispatched {
            patient: patient.to_string(),
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ActivityLog::new(2);
        log.record(dispatched("a"));
        log.record(dispatched("b"));
        log.record(dispatched("c"));

        let kinds: Vec<_> = log.entries().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds, vec![dispatched("b"), dispatched("c")]);
        assert_eq!(log.latest().map(|e| e.id), Some(3));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut log = ActivityLog::new(0);
        log.record(dispatched("a"));
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
