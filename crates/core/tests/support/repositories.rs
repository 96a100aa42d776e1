//! Mock repository implementations for testing
//!
//! One in-memory store backs every core port so that service tests observe
//! the same state across events, users and attendees.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventdesk_core::{AttendeeRepository, EventRepository, UserRepository};
use eventdesk_domain::{
    Commitment, Event, EventAttendee, EventDeskError, EventFilter, EventId, NewEvent, NewUser,
    Result as DomainResult, TimeWindow, User, UserId,
};

#[derive(Default)]
struct State {
    events: Vec<Event>,
    users: Vec<User>,
    attendees: Vec<EventAttendee>,
}

/// In-memory mock for all three repository ports.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Seed a user directly, bypassing the service.
    pub fn seed_user(&self, name: &str) -> UserId {
        let mut state = self.state.lock().unwrap();
        let user_id = state.users.len() as i64 + 1;
        state.users.push(User { user_id, user_name: name.to_string() });
        user_id
    }

    /// Seed an event directly, bypassing validation.
    pub fn seed_event(&self, name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> EventId {
        let mut state = self.state.lock().unwrap();
        let event_id = state.events.len() as i64 + 1;
        state.events.push(Event {
            event_id,
            event_name: name.to_string(),
            start_date_time: start,
            end_date_time: end,
        });
        event_id
    }

    /// Make every subsequent insert fail with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn attendees(&self) -> Vec<EventAttendee> {
        self.state.lock().unwrap().attendees.clone()
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(EventDeskError::Database("disk I/O error".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let event = event.into_event(state.events.len() as i64 + 1);
        state.events.push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, event_id: EventId) -> DomainResult<Option<Event>> {
        let state = self.state.lock().unwrap();
        Ok(state.events.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn find_overlapping_by_name(
        &self,
        name: &str,
        window: TimeWindow,
    ) -> DomainResult<Vec<Event>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .events
            .iter()
            .filter(|e| e.event_name == name && e.window().overlaps(&window))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: EventFilter, now: DateTime<Utc>) -> DomainResult<Vec<Event>> {
        let state = self.state.lock().unwrap();
        Ok(state.events.iter().filter(|e| filter.matches(&e.window(), now)).cloned().collect())
    }
}

#[async_trait]
impl AttendeeRepository for InMemoryStore {
    async fn commitments_for(&self, user_ids: &[UserId]) -> DomainResult<Vec<Commitment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attendees
            .iter()
            .filter(|a| user_ids.contains(&a.user_id))
            .filter_map(|a| {
                state.events.iter().find(|e| e.event_id == a.event_id).map(|e| Commitment {
                    user_id: a.user_id,
                    event_id: a.event_id,
                    window: e.window(),
                })
            })
            .collect())
    }

    async fn insert_batch(&self, attendees: &[EventAttendee]) -> DomainResult<usize> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if attendees.iter().any(|a| state.attendees.contains(a)) {
            return Err(EventDeskError::Database("UNIQUE constraint failed".into()));
        }
        state.attendees.extend_from_slice(attendees);
        Ok(attendees.len())
    }

    async fn list_attendees(&self, event_id: EventId) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut users: Vec<User> = state
            .attendees
            .iter()
            .filter(|a| a.event_id == event_id)
            .filter_map(|a| state.users.iter().find(|u| u.user_id == a.user_id).cloned())
            .collect();
        users.sort_by_key(|u| u.user_id);
        Ok(users)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let user = User { user_id: state.users.len() as i64 + 1, user_name: user.user_name };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn find_by_ids(&self, user_ids: &[UserId]) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().filter(|u| user_ids.contains(&u.user_id)).cloned().collect())
    }
}
