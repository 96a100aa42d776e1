//! Attendance records

use serde::{Deserialize, Serialize};

use super::event::EventId;
use super::user::UserId;
use super::window::TimeWindow;

/// Registration of one user for one event. `(user_id, event_id)` is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
    /// Attending user.
    pub user_id: UserId,
    /// Attended event.
    pub event_id: EventId,
}

/// An existing attendance joined with the window of the attended event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment {
    /// Committed user.
    pub user_id: UserId,
    /// Event the user attends.
    pub event_id: EventId,
    /// Window of that event.
    pub window: TimeWindow,
}
