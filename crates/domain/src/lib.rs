//! # EventDesk Domain
//!
//! Business domain types and models for EventDesk.
//!
//! This crate contains:
//! - Domain data types (Event, User, EventAttendee, ImportResult)
//! - The time-window overlap predicate shared by every conflict rule
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Client-facing message constants
//!
//! ## Architecture
//! - No dependencies on other EventDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::datetime::{from_unix_millis, parse_timestamp, truncate_to_millis};
