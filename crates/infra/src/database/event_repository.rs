//! Event repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventdesk_common::storage::StorageError;
use eventdesk_core::EventRepository as EventRepositoryPort;
use eventdesk_domain::{Event, EventFilter, EventId, NewEvent, Result as DomainResult, TimeWindow};
use rusqlite::{Row, ToSql};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use super::{map_join_error, map_storage_error, millis_column};

const EVENT_COLUMNS: &str = "event_id, event_name, start_date_time, end_date_time";

/// SQLite-backed implementation of `EventRepository`
pub struct SqliteEventRepository {
    db: Arc<DbManager>,
}

impl SqliteEventRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepositoryPort for SqliteEventRepository {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Event> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO events (event_name, start_date_time, end_date_time)
                 VALUES (?1, ?2, ?3)",
                &[
                    &event.event_name,
                    &event.window.start.timestamp_millis(),
                    &event.window.end.timestamp_millis(),
                ],
            )
            .map_err(map_storage_error)?;

            let event_id = conn.last_insert_rowid();
            debug!(event_id, "Inserted event row");
            Ok(event.into_event(event_id))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, event_id: EventId) -> DomainResult<Option<Event>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Event>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                &format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = ?1"),
                &[&event_id],
                map_event_row,
            );

            match result {
                Ok(event) => Ok(Some(event)),
                Err(StorageError::Rusqlite(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
                Err(err) => Err(map_storage_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_overlapping_by_name(
        &self,
        name: &str,
        window: TimeWindow,
    ) -> DomainResult<Vec<Event>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Event>> {
            let conn = db.get_connection()?;
            conn.query_map(
                &format!(
                    "SELECT {EVENT_COLUMNS} FROM events
                     WHERE event_name = ?1 AND start_date_time < ?2 AND end_date_time > ?3
                     ORDER BY event_id"
                ),
                &[&name, &window.end.timestamp_millis(), &window.start.timestamp_millis()],
                map_event_row,
            )
            .map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self, filter: EventFilter, now: DateTime<Utc>) -> DomainResult<Vec<Event>> {
        let db = Arc::clone(&self.db);
        let now_millis = now.timestamp_millis();

        task::spawn_blocking(move || -> DomainResult<Vec<Event>> {
            let conn = db.get_connection()?;

            let (condition, params): (&str, Vec<&dyn ToSql>) = match filter {
                EventFilter::Upcoming => {
                    ("WHERE start_date_time >= ?1", vec![&now_millis as &dyn ToSql])
                }
                EventFilter::Past => ("WHERE end_date_time < ?1", vec![&now_millis as &dyn ToSql]),
                EventFilter::All => ("", Vec::new()),
            };

            conn.query_map(
                &format!("SELECT {EVENT_COLUMNS} FROM events {condition} ORDER BY event_id"),
                &params,
                map_event_row,
            )
            .map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_event_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        event_id: row.get(0)?,
        event_name: row.get(1)?,
        start_date_time: millis_column(row, 2)?,
        end_date_time: millis_column(row, 3)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let manager =
            DbManager::new(temp_dir.path().join("test.db"), 2).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 20, hour, 0, 0).unwrap()
    }

    fn new_event(name: &str, start: u32, end: u32) -> NewEvent {
        NewEvent { event_name: name.into(), window: TimeWindow::new(at(start), at(end)).unwrap() }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_insert_and_find_by_id() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteEventRepository::new(db);

        let created = repo.insert(new_event("Launch", 9, 11)).await.unwrap();
        let fetched = repo.find_by_id(created.event_id).await.unwrap();

        assert_eq!(fetched, Some(created));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_millisecond_precision_survives_storage() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteEventRepository::new(db);
        let start = at(9) + Duration::milliseconds(123);
        let event = NewEvent {
            event_name: "Precise".into(),
            window: TimeWindow::new(start, start + Duration::minutes(5)).unwrap(),
        };

        let created = repo.insert(event).await.unwrap();
        let fetched = repo.find_by_id(created.event_id).await.unwrap().unwrap();

        assert_eq!(fetched.start_date_time, start);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_overlap_query_uses_strict_bounds() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteEventRepository::new(db);
        repo.insert(new_event("Standup", 9, 10)).await.unwrap();

        let touching = TimeWindow::new(at(10), at(11)).unwrap();
        assert!(repo.find_overlapping_by_name("Standup", touching).await.unwrap().is_empty());

        let overlapping = TimeWindow::new(at(8), at(10)).unwrap();
        assert_eq!(repo.find_overlapping_by_name("Standup", overlapping).await.unwrap().len(), 1);
        assert!(repo.find_overlapping_by_name("standup", overlapping).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_filters() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteEventRepository::new(db);
        let past = repo.insert(new_event("Past", 6, 8)).await.unwrap();
        let ongoing = repo.insert(new_event("Ongoing", 9, 13)).await.unwrap();
        let upcoming = repo.insert(new_event("Upcoming", 12, 14)).await.unwrap();
        let now = at(12);

        let ids = |events: Vec<Event>| events.into_iter().map(|e| e.event_id).collect::<Vec<_>>();

        assert_eq!(
            ids(repo.list(EventFilter::Upcoming, now).await.unwrap()),
            vec![upcoming.event_id]
        );
        assert_eq!(ids(repo.list(EventFilter::Past, now).await.unwrap()), vec![past.event_id]);
        assert_eq!(
            ids(repo.list(EventFilter::All, now).await.unwrap()),
            vec![past.event_id, ongoing.event_id, upcoming.event_id]
        );
    }
}
