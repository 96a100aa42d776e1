//! Database implementations

pub mod attendee_repository;
pub mod event_repository;
pub mod manager;
pub mod user_repository;

pub use attendee_repository::SqliteAttendeeRepository;
pub use event_repository::SqliteEventRepository;
pub use manager::DbManager;
pub use user_repository::SqliteUserRepository;

pub use eventdesk_common::storage::{HealthStatus, PoolMetricsSnapshot};

use chrono::{DateTime, Utc};
use eventdesk_common::storage::StorageError;
use eventdesk_domain::{from_unix_millis, EventDeskError};
use rusqlite::types::{FromSqlError, Type};
use tokio::task::JoinError;

use crate::errors::InfraError;

/// Keeps `IN (...)` lists well under SQLite's bound-parameter limit.
const MAX_IN_PARAMS: usize = 500;

fn map_storage_error(err: StorageError) -> EventDeskError {
    InfraError::from(err).into()
}

fn map_sql_error(err: rusqlite::Error) -> EventDeskError {
    InfraError::from(err).into()
}

fn map_join_error(err: JoinError) -> EventDeskError {
    InfraError::from(err).into()
}

/// `?, ?, ?` with `count` placeholders.
fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Read a Unix-millisecond column as a UTC timestamp.
fn millis_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    from_unix_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            Box::new(FromSqlError::OutOfRange(millis)),
        )
    })
}
