//! # EventDesk API
//!
//! HTTP application layer - routes, handlers and process wiring.
//!
//! This crate contains:
//! - axum router and handlers (HTTP → services bridge)
//! - Application context (dependency injection)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors onto HTTP status codes

pub mod context;
pub mod http;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use http::create_router;
