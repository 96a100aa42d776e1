//! Port interfaces for event and attendee storage
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventdesk_domain::{
    Commitment, Event, EventAttendee, EventFilter, EventId, NewEvent, Result, TimeWindow, User,
    UserId,
};

/// Trait for persisting and querying events
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a validated event and return it with its assigned id
    async fn insert(&self, event: NewEvent) -> Result<Event>;

    /// Look up an event by id
    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>>;

    /// Events with exactly `name` whose window strictly overlaps `window`
    async fn find_overlapping_by_name(&self, name: &str, window: TimeWindow)
        -> Result<Vec<Event>>;

    /// Events matching `filter` relative to `now`, by ascending id
    async fn list(&self, filter: EventFilter, now: DateTime<Utc>) -> Result<Vec<Event>>;
}

/// Trait for attendee registrations
#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    /// Every existing attendance of the given users, with the attended
    /// event's window
    async fn commitments_for(&self, user_ids: &[UserId]) -> Result<Vec<Commitment>>;

    /// Insert all rows atomically; returns the number inserted
    async fn insert_batch(&self, attendees: &[EventAttendee]) -> Result<usize>;

    /// Users registered for an event, by ascending user id
    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<User>>;
}
