//! Storage primitives for SQLite databases
//!
//! This module provides the pooled SQLite connection used by the
//! infrastructure crate, plus the storage error and health types.

pub mod error;
pub mod metrics;
pub mod sqlite;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use metrics::{PoolMetricsSnapshot, StorageMetrics};
pub use sqlite::{apply_connection_pragmas, SqliteConnection, SqlitePool, SqlitePoolConfig};
pub use types::HealthStatus;
