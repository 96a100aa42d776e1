//! Shared test helpers for `eventdesk-core` integration tests.
//!
//! These helpers provide an in-memory store and a pinned clock so that
//! service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use eventdesk_core::{EventService, FixedClock, UserService};

pub use repositories::InMemoryStore;

/// Instant every service test starts at.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 20, 12, 0, 0).unwrap()
}

/// Services wired to one shared in-memory store.
pub struct Harness {
    pub store: InMemoryStore,
    pub clock: FixedClock,
    pub events: EventService,
    pub users: UserService,
}

impl Harness {
    pub fn new() -> Self {
        let store = InMemoryStore::default();
        let clock = FixedClock::new(fixed_now());
        let shared = Arc::new(store.clone());

        let events =
            EventService::new(shared.clone(), shared.clone(), shared.clone(), Arc::new(clock.clone()));
        let users = UserService::new(shared);

        Self { store, clock, events, users }
    }
}
