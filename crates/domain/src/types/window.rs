//! Half-open time windows and the overlap predicate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MSG_END_BEFORE_START;
use crate::errors::{EventDeskError, Result};

/// A `[start, end)` interval in UTC.
///
/// Deserialization goes through [`TimeWindow::new`], so a decoded window
/// always has `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct TimeWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawWindow> for TimeWindow {
    type Error = EventDeskError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    /// Build a window, rejecting `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(EventDeskError::InvalidInput(MSG_END_BEFORE_START.to_string()));
        }
        Ok(Self { start, end })
    }

    /// Strict overlap: windows that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the window opens at or after `instant` (the `upcoming` rule).
    pub fn starts_at_or_after(&self, instant: DateTime<Utc>) -> bool {
        self.start >= instant
    }

    /// Whether the window closed strictly before `instant` (the `past` rule).
    pub fn ends_before(&self, instant: DateTime<Utc>) -> bool {
        self.end < instant
    }
}
