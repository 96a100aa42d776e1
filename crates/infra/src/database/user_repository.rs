//! User repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use eventdesk_core::UserRepository as UserRepositoryPort;
use eventdesk_domain::{NewUser, Result as DomainResult, User, UserId};
use rusqlite::{Row, ToSql};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_storage_error, placeholders, MAX_IN_PARAMS};

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<User> {
            let conn = db.get_connection()?;
            conn.execute("INSERT INTO users (user_name) VALUES (?1)", &[&user.user_name])
                .map_err(map_storage_error)?;
            Ok(User { user_id: conn.last_insert_rowid(), user_name: user.user_name })
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<User>> {
            let conn = db.get_connection()?;
            conn.query_map("SELECT user_id, user_name FROM users ORDER BY user_id", &[], map_user_row)
                .map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_ids(&self, user_ids: &[UserId]) -> DomainResult<Vec<User>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let user_ids = user_ids.to_vec();

        task::spawn_blocking(move || -> DomainResult<Vec<User>> {
            let conn = db.get_connection()?;
            let mut users = Vec::new();

            for chunk in user_ids.chunks(MAX_IN_PARAMS) {
                let params: Vec<&dyn ToSql> = chunk.iter().map(|id| id as &dyn ToSql).collect();
                let rows = conn
                    .query_map(
                        &format!(
                            "SELECT user_id, user_name FROM users WHERE user_id IN ({})
                             ORDER BY user_id",
                            placeholders(chunk.len())
                        ),
                        &params,
                        map_user_row,
                    )
                    .map_err(map_storage_error)?;
                users.extend(rows);
            }

            Ok(users)
        })
        .await
        .map_err(map_join_error)?
    }
}

pub(super) fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User { user_id: row.get(0)?, user_name: row.get(1)? })
}
