//! Time filter for event listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::window::TimeWindow;
use crate::errors::{EventDeskError, Result};
use crate::impl_domain_status_conversions;

/// Which events a listing returns, relative to the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    /// Events that start at or after now.
    #[default]
    Upcoming,
    /// Events that ended before now.
    Past,
    All,
}

impl_domain_status_conversions!(EventFilter {
    Upcoming => "upcoming" | "0",
    Past => "past" | "1",
    All => "all" | "2",
});

impl EventFilter {
    /// Parse an optional query value; absent or empty means `Upcoming`.
    pub fn from_query(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => raw.parse().map_err(|_| {
                EventDeskError::InvalidInput(format!(
                    "Invalid filter value '{}'. Expected one of: {}.",
                    raw,
                    Self::NAMES.join(", ")
                ))
            }),
        }
    }

    /// Whether an event with `window` passes the filter at `now`.
    pub fn matches(&self, window: &TimeWindow, now: DateTime<Utc>) -> bool {
        match self {
            Self::Upcoming => window.starts_at_or_after(now),
            Self::Past => window.ends_before(now),
            Self::All => true,
        }
    }
}
