//! Attendee repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use eventdesk_core::AttendeeRepository as AttendeeRepositoryPort;
use eventdesk_domain::{
    Commitment, EventAttendee, EventId, Result as DomainResult, TimeWindow, User, UserId,
};
use rusqlite::{params, Row, ToSql};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use super::user_repository::map_user_row;
use super::{
    map_join_error, map_sql_error, map_storage_error, millis_column, placeholders, MAX_IN_PARAMS,
};

/// SQLite-backed implementation of `AttendeeRepository`
pub struct SqliteAttendeeRepository {
    db: Arc<DbManager>,
}

impl SqliteAttendeeRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendeeRepositoryPort for SqliteAttendeeRepository {
    async fn commitments_for(&self, user_ids: &[UserId]) -> DomainResult<Vec<Commitment>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let user_ids = user_ids.to_vec();

        task::spawn_blocking(move || -> DomainResult<Vec<Commitment>> {
            let conn = db.get_connection()?;
            let mut commitments = Vec::new();

            for chunk in user_ids.chunks(MAX_IN_PARAMS) {
                let params: Vec<&dyn ToSql> = chunk.iter().map(|id| id as &dyn ToSql).collect();
                let rows = conn
                    .query_map(
                        &format!(
                            "SELECT a.user_id, a.event_id, e.start_date_time, e.end_date_time
                             FROM event_attendees a
                             JOIN events e ON e.event_id = a.event_id
                             WHERE a.user_id IN ({})",
                            placeholders(chunk.len())
                        ),
                        &params,
                        map_commitment_row,
                    )
                    .map_err(map_storage_error)?;
                commitments.extend(rows);
            }

            Ok(commitments)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert_batch(&self, attendees: &[EventAttendee]) -> DomainResult<usize> {
        if attendees.is_empty() {
            return Ok(0);
        }

        let db = Arc::clone(&self.db);
        let attendees = attendees.to_vec();

        task::spawn_blocking(move || -> DomainResult<usize> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_storage_error)?;

            {
                let mut stmt = tx
                    .prepare_cached("INSERT INTO event_attendees (user_id, event_id) VALUES (?1, ?2)")
                    .map_err(map_sql_error)?;
                for attendee in &attendees {
                    stmt.execute(params![attendee.user_id, attendee.event_id])
                        .map_err(map_sql_error)?;
                }
            }

            tx.commit().map_err(map_sql_error)?;
            debug!(rows = attendees.len(), "Committed attendee batch");
            Ok(attendees.len())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_attendees(&self, event_id: EventId) -> DomainResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<User>> {
            let conn = db.get_connection()?;
            conn.query_map(
                "SELECT u.user_id, u.user_name
                 FROM event_attendees a
                 JOIN users u ON u.user_id = a.user_id
                 WHERE a.event_id = ?1
                 ORDER BY u.user_id",
                &[&event_id],
                map_user_row,
            )
            .map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_commitment_row(row: &Row<'_>) -> rusqlite::Result<Commitment> {
    Ok(Commitment {
        user_id: row.get(0)?,
        event_id: row.get(1)?,
        window: TimeWindow { start: millis_column(row, 2)?, end: millis_column(row, 3)? },
    })
}
