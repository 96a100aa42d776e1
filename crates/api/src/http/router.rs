//! HTTP router configuration.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::context::AppContext;

/// Create the application router.
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let api = Router::new()
        .route("/events", get(handlers::list_events))
        .route("/events/create-event", post(handlers::create_event))
        .route("/events/import-attendees", post(handlers::import_attendees))
        .route("/events/{event_id}/attendees", get(handlers::list_attendees))
        .route("/users", get(handlers::list_users).post(handlers::create_user));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ctx)
}
