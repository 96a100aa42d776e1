//! Event lifecycle, listings and attendee import

pub mod conflict;
pub mod ports;
pub mod service;

pub use service::{CreateEvent, EventService};
