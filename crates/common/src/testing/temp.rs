//! Temporary directory helper
//!
//! RAII wrapper that removes the directory (and any database or config
//! files written into it) when dropped.

#![allow(clippy::missing_errors_doc)]

use std::path::{Path, PathBuf};
use std::{fs, io};

/// File name used for test databases created through [`TempDir::db_path`].
pub const TEST_DB_FILE: &str = "eventdesk.db";

/// Temporary directory that is automatically deleted when dropped
///
/// ```rust,ignore
/// use eventdesk_common::testing::TempDir;
///
/// let temp_dir = TempDir::new("store-tests").unwrap();
/// let db_path = temp_dir.db_path();
/// assert!(db_path.starts_with(temp_dir.path()));
/// ```
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Create a new uniquely named temporary directory with a prefix
    pub fn new(prefix: &str) -> io::Result<Self> {
        let path = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the SQLite database file inside this directory
    pub fn db_path(&self) -> PathBuf {
        self.path.join(TEST_DB_FILE)
    }

    /// Write a file (for example a config fixture) into the directory
    pub fn create_file(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let file_path = self.path.join(name);
        fs::write(&file_path, contents)?;
        Ok(file_path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
