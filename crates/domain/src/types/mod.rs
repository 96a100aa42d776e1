//! Domain types and models

pub mod attendee;
pub mod event;
pub mod filter;
pub mod import;
pub mod user;
pub mod window;

pub use attendee::{Commitment, EventAttendee};
pub use event::{Event, EventId, NewEvent};
pub use filter::EventFilter;
pub use import::ImportResult;
pub use user::{NewUser, User, UserId};
pub use window::TimeWindow;
