//! Application context - dependency injection container

use std::sync::Arc;

use eventdesk_core::{Clock, EventService, SystemClock, UserService};
use eventdesk_domain::{Config, Result};
use eventdesk_infra::{
    DbManager, HealthStatus, InfraError, SqliteAttendeeRepository, SqliteEventRepository,
    SqliteUserRepository,
};
use tokio::task;

/// Application context - holds all services and dependencies
pub struct AppContext {
    /// Configuration the context was built from
    pub config: Config,
    /// Shared database pool and schema manager
    pub db: Arc<DbManager>,
    /// Event creation, listing and attendee import
    pub events: Arc<EventService>,
    /// User registry
    pub users: Arc<UserService>,
}

impl AppContext {
    /// Open the configured database, apply the schema and wire services
    /// against the system clock
    pub async fn new(config: Config) -> Result<Self> {
        Self::new_with_clock(config, Arc::new(SystemClock)).await
    }

    /// Same as [`AppContext::new`] with an explicit time source
    ///
    /// Tests use this to pin "now".
    pub async fn new_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let db_config = config.database.clone();

        let db = task::spawn_blocking(move || -> Result<DbManager> {
            let manager = DbManager::new(&db_config.path, db_config.pool_size)?;
            manager.run_migrations()?;
            Ok(manager)
        })
        .await
        .map_err(InfraError::from)??;
        let db = Arc::new(db);

        let event_repository = Arc::new(SqliteEventRepository::new(Arc::clone(&db)));
        let attendee_repository = Arc::new(SqliteAttendeeRepository::new(Arc::clone(&db)));
        let user_repository = Arc::new(SqliteUserRepository::new(Arc::clone(&db)));

        let events = Arc::new(EventService::new(
            event_repository,
            attendee_repository,
            user_repository.clone(),
            clock,
        ));
        let users = Arc::new(UserService::new(user_repository));

        tracing::info!(db_path = %db.path().display(), "application context initialised");

        Ok(Self { config, db, events, users })
    }

    /// Check database connectivity off the async runtime
    ///
    /// Returns the pool occupancy seen by the check.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || db.health_check()).await.map_err(InfraError::from)?
    }
}
