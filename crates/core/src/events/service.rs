//! Event service - core business logic

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use eventdesk_domain::constants::{
    DEFAULT_EVENT_DURATION_HOURS, MSG_DUPLICATE_EVENT, MSG_EVENT_NAME_REQUIRED, MSG_EVENT_NOT_FOUND,
};
use eventdesk_domain::{
    truncate_to_millis, Event, EventAttendee, EventDeskError, EventFilter, EventId, ImportResult,
    NewEvent, Result, TimeWindow, User, UserId,
};
use tracing::{debug, info, warn};

use super::conflict::partition_candidates;
use super::ports::{AttendeeRepository, EventRepository};
use crate::clock::Clock;
use crate::users::ports::UserRepository;

/// Input for [`EventService::create_event`]. Absent times take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEvent {
    /// Required; blank is rejected.
    pub event_name: Option<String>,
    /// Defaults to now.
    pub start_date_time: Option<DateTime<Utc>>,
    /// Defaults to now plus one day.
    pub end_date_time: Option<DateTime<Utc>>,
}

/// Event lifecycle, listing and attendee import
pub struct EventService {
    events: Arc<dyn EventRepository>,
    attendees: Arc<dyn AttendeeRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl EventService {
    /// Create a new event service
    pub fn new(
        events: Arc<dyn EventRepository>,
        attendees: Arc<dyn AttendeeRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { events, attendees, users, clock }
    }

    /// Validate and store a new event
    ///
    /// A missing start defaults to now and a missing end to now plus one
    /// day, both from a single clock reading.
    ///
    /// # Errors
    /// - `InvalidInput` for a blank name, `start >= end`, or a same-named
    ///   event whose window overlaps
    /// - any repository error unchanged
    pub async fn create_event(&self, request: CreateEvent) -> Result<Event> {
        let event_name = match request.event_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                warn!("Rejected event without a name");
                return Err(EventDeskError::InvalidInput(MSG_EVENT_NAME_REQUIRED.to_string()));
            }
        };

        let now = truncate_to_millis(self.clock.now());
        let start = request.start_date_time.map_or(now, truncate_to_millis);
        let end = request
            .end_date_time
            .map_or(now + Duration::hours(DEFAULT_EVENT_DURATION_HOURS), truncate_to_millis);

        info!(event_name = %event_name, %start, %end, "Creating event");

        let window = TimeWindow::new(start, end).inspect_err(|_| {
            warn!(event_name = %event_name, %start, %end, "Event end is not after its start");
        })?;

        let duplicates = self.events.find_overlapping_by_name(&event_name, window).await?;
        if let Some(existing) = duplicates.first() {
            warn!(
                event_name = %event_name,
                existing_event_id = existing.event_id,
                "Event overlaps an existing event with the same name"
            );
            return Err(EventDeskError::InvalidInput(MSG_DUPLICATE_EVENT.to_string()));
        }

        let event = self.events.insert(NewEvent { event_name, window }).await?;
        info!(event_id = event.event_id, "Event created");
        Ok(event)
    }

    /// List events relative to the current instant
    pub async fn list_events(&self, filter: EventFilter) -> Result<Vec<Event>> {
        let now = self.clock.now();
        let events = self.events.list(filter, now).await?;
        info!(%filter, count = events.len(), "Fetched events");
        Ok(events)
    }

    /// Register users for an event, skipping those with overlapping
    /// commitments
    ///
    /// Duplicate ids count once. Ids with no matching user are logged and
    /// ignored. Importable users are written in one batch.
    ///
    /// # Errors
    /// - `NotFound` if the event does not exist
    /// - any repository error unchanged
    pub async fn import_attendees(
        &self,
        event_id: EventId,
        attendee_ids: &[UserId],
    ) -> Result<ImportResult> {
        let event = self.require_event(event_id).await?;
        let target = event.window();

        info!(event_id, candidates = attendee_ids.len(), "Importing attendees");

        let names: HashMap<UserId, String> = self
            .users
            .find_by_ids(attendee_ids)
            .await?
            .into_iter()
            .map(|user| (user.user_id, user.user_name))
            .collect();

        let known: Vec<UserId> = attendee_ids
            .iter()
            .copied()
            .filter(|user_id| {
                let exists = names.contains_key(user_id);
                if !exists {
                    warn!(event_id, user_id, "Skipping unknown attendee id");
                }
                exists
            })
            .collect();

        let commitments = self.attendees.commitments_for(&known).await?;
        let partition = partition_candidates(&target, &known, &commitments);

        for user_id in &partition.importable {
            debug!(event_id, user_id, "No conflicting commitment");
        }
        for user_id in &partition.conflicting {
            warn!(event_id, user_id, "Attendee has a conflicting commitment");
        }

        let rows: Vec<EventAttendee> = partition
            .importable
            .iter()
            .map(|&user_id| EventAttendee { user_id, event_id })
            .collect();

        if !rows.is_empty() {
            let saved = self.attendees.insert_batch(&rows).await?;
            info!(event_id, saved, "Saved attendee batch");
        }

        let conflicting_names: Vec<String> = partition
            .conflicting
            .iter()
            .filter_map(|user_id| names.get(user_id).cloned())
            .collect();

        let result = ImportResult::from_outcome(rows.len(), conflicting_names);
        info!(
            event_id,
            imported = result.imported_count(),
            conflicting = result.conflicting_count(),
            "Attendee import finished"
        );
        Ok(result)
    }

    /// Users registered for an event
    ///
    /// # Errors
    /// `NotFound` if the event does not exist.
    pub async fn list_attendees(&self, event_id: EventId) -> Result<Vec<User>> {
        self.require_event(event_id).await?;
        let attendees = self.attendees.list_attendees(event_id).await?;
        debug!(event_id, count = attendees.len(), "Fetched attendees");
        Ok(attendees)
    }

    async fn require_event(&self, event_id: EventId) -> Result<Event> {
        self.events.find_by_id(event_id).await?.ok_or_else(|| {
            warn!(event_id, "Event not found");
            EventDeskError::NotFound(MSG_EVENT_NOT_FOUND.to_string())
        })
    }
}
