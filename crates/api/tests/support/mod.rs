//! Shared fixtures for HTTP-level tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use eventdesk_common::testing::TempDir;
use eventdesk_core::FixedClock;
use eventdesk_domain::{Config, DatabaseConfig};
use eventdesk_lib::{create_router, AppContext};
use serde_json::Value;
use tower::ServiceExt;

/// Instant every HTTP test treats as "now".
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 20, 12, 0, 0).unwrap()
}

/// Router backed by a migrated database in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub ctx: Arc<AppContext>,
    pub clock: FixedClock,
    _temp_dir: TempDir,
}

/// Status plus raw body text of a response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new("api-test").expect("temp dir should be created");
        let config = Config {
            database: DatabaseConfig {
                path: temp_dir.db_path().to_string_lossy().into_owned(),
                pool_size: 4,
            },
            ..Config::default()
        };

        let clock = FixedClock::new(fixed_now());
        let ctx = AppContext::new_with_clock(config, Arc::new(clock.clone()))
            .await
            .expect("context should initialise");
        let ctx = Arc::new(ctx);
        let router = create_router(Arc::clone(&ctx));

        Self { router, ctx, clock, _temp_dir: temp_dir }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("request should complete");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body should be readable");
        TestResponse { status, body: String::from_utf8_lossy(&bytes).into_owned() }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Create an event through the API and return its id.
    pub async fn create_event(&self, name: &str, start: &str, end: &str) -> i64 {
        let response = self
            .post(&format!(
                "/api/events/create-event?eventName={name}&startDateTime={start}&endDateTime={end}"
            ))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.json()["eventId"].as_i64().expect("eventId")
    }

    /// Create a user through the API and return its id.
    pub async fn create_user(&self, name: &str) -> i64 {
        let response = self.post(&format!("/api/users?userName={name}")).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.json()["userId"].as_i64().expect("userId")
    }

    /// Run raw SQL against the backing database.
    pub fn execute_sql(&self, sql: &str) {
        let conn = self.ctx.db.get_connection().expect("connection");
        conn.execute(sql, &[]).expect("sql should run");
    }
}
