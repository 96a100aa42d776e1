//! Application constants
//!
//! Client-facing messages are part of the HTTP contract and must not change
//! wording.

// Event creation
/// Event created without a name.
pub const MSG_EVENT_NAME_REQUIRED: &str = "The eventName field is required.";
/// Event window with `start >= end`.
pub const MSG_END_BEFORE_START: &str = "End date must be after start date.";
/// Same-named event already occupies an overlapping window.
pub const MSG_DUPLICATE_EVENT: &str = "An event already exists within the specified date range.";
/// Generic 500 body for event creation.
pub const MSG_CREATE_EVENT_FAILED: &str = "An error occurred while creating the event.";

// Event queries
/// Generic 500 body for event listing.
pub const MSG_LIST_EVENTS_FAILED: &str = "An error occurred while fetching events.";

// Attendee import
/// Unknown event id on import or attendee listing.
pub const MSG_EVENT_NOT_FOUND: &str = "Event not found. Please try to provide a valid EventId.";
/// Import summary when nobody conflicted.
pub const MSG_ALL_ATTENDEES_IMPORTED: &str =
    "All attendees were imported successfully without conflicts.";
/// Generic 500 body for attendee import.
pub const MSG_IMPORT_FAILED: &str = "An error occurred while importing attendees.";
/// Generic 500 body for attendee listing.
pub const MSG_LIST_ATTENDEES_FAILED: &str = "An error occurred while fetching attendees.";

// Users
/// User created without a name.
pub const MSG_USER_NAME_REQUIRED: &str = "The userName field is required.";
/// Generic 500 body for user creation.
pub const MSG_CREATE_USER_FAILED: &str = "An error occurred while creating the user.";
/// Generic 500 body for user listing.
pub const MSG_LIST_USERS_FAILED: &str = "An error occurred while fetching users.";

/// Length of the window assigned when an event omits its end time.
pub const DEFAULT_EVENT_DURATION_HOURS: i64 = 24;

// Server defaults
/// Listen interface when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Listen port when none is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// Database file when none is configured.
pub const DEFAULT_DB_PATH: &str = "eventdesk.db";
/// Pool size when none is configured.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
/// Filter directive when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
