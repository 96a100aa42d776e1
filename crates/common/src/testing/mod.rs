//! Testing utilities shared by the EventDesk test suites
//!
//! - **[`temp`]**: self-cleaning temporary directories for SQLite files and
//!   config fixtures

pub mod temp;

pub use temp::TempDir;
