//! Outcome of an attendee import

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::constants::MSG_ALL_ATTENDEES_IMPORTED;

/// Result of importing a batch of attendees into an event.
///
/// Serializes to one of two JSON shapes:
///
/// ```json
/// {"message": "...", "importedAttendeesCount": 3}
/// {"message": "...", "importedAttendeesCount": 1, "conflictingAttendeesCount": 2,
///  "conflictingAttendees": ["Ana", "Ben"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResult {
    /// Every candidate was imported.
    Clean {
        /// Rows written.
        imported_count: usize,
    },
    /// At least one candidate had an overlapping commitment.
    WithConflicts {
        /// Rows written.
        imported_count: usize,
        /// Number of entries in `conflicting_names`.
        conflicting_count: usize,
        /// Display names of the conflicting users, in request order.
        conflicting_names: Vec<String>,
    },
}

impl ImportResult {
    /// Choose the variant from the number imported and the resolved names of
    /// the conflicting users.
    pub fn from_outcome(imported_count: usize, conflicting_names: Vec<String>) -> Self {
        if conflicting_names.is_empty() {
            Self::Clean { imported_count }
        } else {
            Self::WithConflicts {
                imported_count,
                conflicting_count: conflicting_names.len(),
                conflicting_names,
            }
        }
    }

    /// Attendees written by the import.
    pub fn imported_count(&self) -> usize {
        match self {
            Self::Clean { imported_count } | Self::WithConflicts { imported_count, .. } => {
                *imported_count
            }
        }
    }

    /// Attendees skipped because of a conflict.
    pub fn conflicting_count(&self) -> usize {
        match self {
            Self::Clean { .. } => 0,
            Self::WithConflicts { conflicting_count, .. } => *conflicting_count,
        }
    }

    /// Client-facing summary line.
    pub fn message(&self) -> String {
        match self {
            Self::Clean { .. } => MSG_ALL_ATTENDEES_IMPORTED.to_string(),
            Self::WithConflicts { imported_count, conflicting_count, .. } => format!(
                "{} attendees imported successfully. {} attendees have conflicts.",
                imported_count, conflicting_count
            ),
        }
    }
}

impl Serialize for ImportResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Clean { imported_count } => {
                let mut state = serializer.serialize_struct("ImportResult", 2)?;
                state.serialize_field("message", &self.message())?;
                state.serialize_field("importedAttendeesCount", imported_count)?;
                state.end()
            }
            Self::WithConflicts { imported_count, conflicting_count, conflicting_names } => {
                let mut state = serializer.serialize_struct("ImportResult", 4)?;
                state.serialize_field("message", &self.message())?;
                state.serialize_field("importedAttendeesCount", imported_count)?;
                state.serialize_field("conflictingAttendeesCount", conflicting_count)?;
                state.serialize_field("conflictingAttendees", conflicting_names)?;
                state.end()
            }
        }
    }
}
