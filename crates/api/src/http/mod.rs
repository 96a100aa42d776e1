//! HTTP surface: routes, request/response shapes and error rendering

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::AppError;
pub use router::create_router;
