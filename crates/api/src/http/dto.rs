//! Request and response shapes for the HTTP API.

use eventdesk_infra::{HealthStatus, PoolMetricsSnapshot};
use serde::{Deserialize, Serialize};

/// Query string of `POST /api/events/create-event`.
///
/// Timestamps stay raw here so an unparsable value can be reported with
/// the offending text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventQuery {
    /// Required; blank counts as missing.
    pub event_name: Option<String>,
    /// Defaults to now.
    pub start_date_time: Option<String>,
    /// Defaults to now plus one day.
    pub end_date_time: Option<String>,
}

/// Query string of `GET /api/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsQuery {
    /// `upcoming` (default), `past` or `all`.
    pub filter: Option<String>,
}

/// Body of `POST /api/events/import-attendees`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportAttendeesRequest {
    /// Target event.
    pub event_id: i64,
    /// Candidate user ids; duplicates collapse.
    #[serde(default)]
    pub attendee_ids: Vec<i64>,
}

/// Query string of `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserQuery {
    /// Required; blank counts as missing.
    pub user_name: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// `connected`, or `error: <reason>`.
    pub database: String,
    /// Pool occupancy and checkout counters; absent when degraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolResponse>,
}

/// Connection pool section of [`HealthResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolResponse {
    /// Connections currently open.
    pub open_connections: usize,
    /// Open connections not checked out.
    pub idle_connections: usize,
    /// Pool size limit.
    pub max_connections: usize,
    /// Successful checkouts since startup.
    pub connections_acquired: u64,
    /// Checkouts that timed out.
    pub connection_timeouts: u64,
    /// Checkouts that failed otherwise.
    pub connection_errors: u64,
    /// Mean checkout wait in milliseconds.
    pub avg_acquire_ms: u64,
}

impl PoolResponse {
    /// Combine a health check result with the pool's running counters.
    pub fn new(status: &HealthStatus, metrics: PoolMetricsSnapshot) -> Self {
        Self {
            open_connections: status.active_connections,
            idle_connections: status.idle_connections,
            max_connections: status.max_connections,
            connections_acquired: metrics.connections_acquired,
            connection_timeouts: metrics.connection_timeouts,
            connection_errors: metrics.connection_errors,
            avg_acquire_ms: metrics.avg_acquire_ms,
        }
    }
}
