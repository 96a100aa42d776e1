//! Shared fixtures for `eventdesk-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use eventdesk_common::testing::TempDir;
use eventdesk_infra::database::{
    DbManager, SqliteAttendeeRepository, SqliteEventRepository, SqliteUserRepository,
};

/// Temporary migrated database that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new("infra-test").expect("temp dir should be created");
        let manager =
            DbManager::new(temp_dir.db_path(), 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    pub fn events(&self) -> SqliteEventRepository {
        SqliteEventRepository::new(Arc::clone(&self.manager))
    }

    pub fn users(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(Arc::clone(&self.manager))
    }

    pub fn attendees(&self) -> SqliteAttendeeRepository {
        SqliteAttendeeRepository::new(Arc::clone(&self.manager))
    }

    /// Count rows in `table`.
    pub fn count(&self, table: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), &[], |row| row.get(0))
            .expect("count query should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}
