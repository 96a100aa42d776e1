//! # EventDesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for event, user and attendee storage
//! - The attendee conflict evaluator
//! - Event and user services
//!
//! ## Architecture Principles
//! - Only depends on `eventdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clock;
pub mod events;
pub mod users;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, FixedClock, SystemClock};
pub use events::conflict::{partition_candidates, Partition};
pub use events::ports::{AttendeeRepository, EventRepository};
pub use events::{CreateEvent, EventService};
pub use users::ports::UserRepository;
pub use users::UserService;
