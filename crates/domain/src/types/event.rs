//! Event records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::window::TimeWindow;

/// Store-assigned event identifier.
pub type EventId = i64;

/// A persisted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned id.
    pub event_id: EventId,
    /// Display name; duplicates are allowed when windows do not overlap.
    pub event_name: String,
    /// Inclusive start, millisecond precision.
    pub start_date_time: DateTime<Utc>,
    /// Exclusive end, millisecond precision.
    pub end_date_time: DateTime<Utc>,
}

impl Event {
    /// The event's `[start, end)` window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow { start: self.start_date_time, end: self.end_date_time }
    }
}

/// A validated event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Non-blank name.
    pub event_name: String,
    /// Validated window.
    pub window: TimeWindow,
}

impl NewEvent {
    /// Attach the id assigned by the store.
    pub fn into_event(self, event_id: EventId) -> Event {
        Event {
            event_id,
            event_name: self.event_name,
            start_date_time: self.window.start,
            end_date_time: self.window.end,
        }
    }
}
