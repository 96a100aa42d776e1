//! # EventDesk Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite repositories for events, users and attendees
//! - The database manager (pool, schema, health check)
//! - Configuration loading from environment and files
//! - Conversions from storage errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `eventdesk-core`
//! - Depends on `eventdesk-common` for pooled SQLite access
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
