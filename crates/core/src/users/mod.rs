//! User registry

pub mod ports;
pub mod service;

pub use service::UserService;
