//! HTTP request handlers

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use eventdesk_core::CreateEvent;
use eventdesk_domain::constants::{
    MSG_CREATE_EVENT_FAILED, MSG_CREATE_USER_FAILED, MSG_IMPORT_FAILED, MSG_LIST_ATTENDEES_FAILED,
    MSG_LIST_EVENTS_FAILED, MSG_LIST_USERS_FAILED,
};
use eventdesk_domain::{parse_timestamp, Event, EventFilter, ImportResult, User};

use super::dto::{
    CreateEventQuery, CreateUserQuery, HealthResponse, ImportAttendeesRequest, ListEventsQuery,
    PoolResponse,
};
use super::error::AppError;
use crate::context::AppContext;
use crate::utils::logging::log_request_execution;

type AppState = State<Arc<AppContext>>;
type ApiResult<T> = Result<Json<T>, AppError>;

/// Run `operation` and record its outcome.
async fn timed<T, F>(operation: &'static str, fut: F) -> ApiResult<T>
where
    F: std::future::Future<Output = Result<T, AppError>>,
{
    let start = Instant::now();
    let result = fut.await;
    log_request_execution(operation, start.elapsed(), result.is_ok());
    result.map(Json)
}

/// Blank query values count as absent.
fn optional_timestamp(
    value: Option<&str>,
    field: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_timestamp(raw, field)
            .map(Some)
            .map_err(|e| AppError::bad_request(e.to_string())),
    }
}

/// `GET /health`
pub async fn health(State(ctx): AppState) -> (StatusCode, Json<HealthResponse>) {
    match ctx.health_check().await {
        Ok(status) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                database: "connected".to_string(),
                pool: Some(PoolResponse::new(&status, ctx.db.pool_metrics())),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    database: format!("error: {e}"),
                    pool: None,
                }),
            )
        }
    }
}

/// `POST /api/events/create-event`
pub async fn create_event(
    State(ctx): AppState,
    query: Result<Query<CreateEventQuery>, QueryRejection>,
) -> ApiResult<Event> {
    const OPERATION: &str = "events::create_event";

    timed(OPERATION, async move {
        let Query(query) = query?;
        let request = CreateEvent {
            event_name: query.event_name,
            start_date_time: optional_timestamp(query.start_date_time.as_deref(), "startDateTime")?,
            end_date_time: optional_timestamp(query.end_date_time.as_deref(), "endDateTime")?,
        };

        ctx.events
            .create_event(request)
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_CREATE_EVENT_FAILED))
    })
    .await
}

/// `GET /api/events?filter=`
pub async fn list_events(
    State(ctx): AppState,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> ApiResult<Vec<Event>> {
    const OPERATION: &str = "events::list_events";

    timed(OPERATION, async move {
        let Query(query) = query?;
        let filter = EventFilter::from_query(query.filter.as_deref())
            .map_err(|e| AppError::bad_request(e.to_string()))?;

        ctx.events
            .list_events(filter)
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_LIST_EVENTS_FAILED))
    })
    .await
}

/// `POST /api/events/import-attendees`
pub async fn import_attendees(
    State(ctx): AppState,
    body: Result<Json<ImportAttendeesRequest>, JsonRejection>,
) -> ApiResult<ImportResult> {
    const OPERATION: &str = "events::import_attendees";

    timed(OPERATION, async move {
        let Json(request) = body?;

        ctx.events
            .import_attendees(request.event_id, &request.attendee_ids)
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_IMPORT_FAILED))
    })
    .await
}

/// `GET /api/events/{event_id}/attendees`
pub async fn list_attendees(
    State(ctx): AppState,
    event_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<User>> {
    const OPERATION: &str = "events::list_attendees";

    timed(OPERATION, async move {
        let Path(event_id) = event_id?;

        ctx.events
            .list_attendees(event_id)
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_LIST_ATTENDEES_FAILED))
    })
    .await
}

/// `POST /api/users?userName=`
pub async fn create_user(
    State(ctx): AppState,
    query: Result<Query<CreateUserQuery>, QueryRejection>,
) -> ApiResult<User> {
    const OPERATION: &str = "users::create_user";

    timed(OPERATION, async move {
        let Query(query) = query?;

        ctx.users
            .create_user(query.user_name)
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_CREATE_USER_FAILED))
    })
    .await
}

/// `GET /api/users`
pub async fn list_users(State(ctx): AppState) -> ApiResult<Vec<User>> {
    const OPERATION: &str = "users::list_users";

    timed(OPERATION, async move {
        ctx.users
            .list_users()
            .await
            .map_err(|e| AppError::from_domain(e, OPERATION, MSG_LIST_USERS_FAILED))
    })
    .await
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn blank_timestamps_are_absent() {
        assert_eq!(optional_timestamp(None, "startDateTime").unwrap(), None);
        assert_eq!(optional_timestamp(Some("  "), "startDateTime").unwrap(), None);
    }

    #[test]
    fn timestamps_parse_as_utc() {
        let parsed = optional_timestamp(Some("2026-10-20T10:00:00"), "startDateTime").unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2026, 10, 20, 10, 0, 0).unwrap()));
    }

    #[test]
    fn bad_timestamp_names_the_field() {
        let err = optional_timestamp(Some("tomorrow"), "endDateTime").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "The value 'tomorrow' is not valid for endDateTime.");
    }
}
