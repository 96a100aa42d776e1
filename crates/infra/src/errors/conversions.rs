//! Conversions from external infrastructure errors into domain errors.

use eventdesk_common::storage::StorageError;
use eventdesk_common::{ErrorClassification, ErrorSeverity};
use eventdesk_domain::EventDeskError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;
use tracing::Level;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EventDeskError);

impl From<InfraError> for EventDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EventDeskError> for InfraError {
    fn from(value: EventDeskError) -> Self {
        InfraError(value)
    }
}

trait IntoEventDeskError {
    fn into_eventdesk(self) -> EventDeskError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → EventDeskError */
/* -------------------------------------------------------------------------- */

impl IntoEventDeskError for SqlError {
    fn into_eventdesk(self) -> EventDeskError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        EventDeskError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        EventDeskError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        EventDeskError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        EventDeskError::Database("foreign key constraint violation".into())
                    }
                    _ => EventDeskError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                EventDeskError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                EventDeskError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => EventDeskError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => EventDeskError::Database("invalid SQL query".into()),
            other => EventDeskError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_eventdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → EventDeskError */
/* -------------------------------------------------------------------------- */

impl IntoEventDeskError for StorageError {
    fn into_eventdesk(self) -> EventDeskError {
        match self {
            StorageError::Rusqlite(err) => err.into_eventdesk(),
            StorageError::Timeout(secs) => EventDeskError::Database(format!(
                "timed out after {secs}s waiting for a database connection"
            )),
            StorageError::Migration(msg) => {
                EventDeskError::Database(format!("Migration error: {msg}"))
            }
            StorageError::InvalidConfig(msg) => EventDeskError::Config(msg),
            other => EventDeskError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        log_storage_failure(&value);
        InfraError(value.into_eventdesk())
    }
}

/// Log level for a storage failure, from its classification.
///
/// Transient failures (busy, locked, pool timeouts) only warn; critical
/// ones always log as errors.
fn storage_log_level(err: &StorageError) -> Level {
    if !err.is_critical() && (err.is_retryable() || err.severity() < ErrorSeverity::Error) {
        Level::WARN
    } else {
        Level::ERROR
    }
}

fn log_storage_failure(err: &StorageError) {
    let severity = err.severity();
    let retryable = err.is_retryable();

    if storage_log_level(err) == Level::WARN {
        tracing::warn!(%severity, retryable, error = %err, "storage operation failed");
    } else {
        tracing::error!(
            %severity,
            retryable,
            critical = err.is_critical(),
            error = %err,
            "storage operation failed"
        );
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → EventDeskError */
/* -------------------------------------------------------------------------- */

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(EventDeskError::Internal(format!("Task join error: {value}")))
    }
}
