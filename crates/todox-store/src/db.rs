//! Database connection management
//!
//! Opens SQLite connections from a file path or a `DATABASE_URL`-style
//! location and applies the connection settings the store relies on.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, unsupported_database_url, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Where a database lives, parsed from a `DATABASE_URL` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parse `:memory:`, `sqlite::memory:`, `sqlite://<path>`, `sqlite:<path>`
    /// or a bare path
    ///
    /// # Errors
    ///
    /// Returns `Config` for empty values and for URLs of other databases.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(unsupported_database_url("database URL is empty"));
        }
        if url == ":memory:" || url == "sqlite::memory:" {
            return Ok(Self::InMemory);
        }
        if let Some(path) = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
        {
            return Ok(Self::File(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = url.split_once("://") {
            return Err(unsupported_database_url(&format!(
                "unsupported database scheme '{}'",
                scheme
            )));
        }
        Ok(Self::File(PathBuf::from(url)))
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open the database a `DATABASE_URL`-style value points at
pub fn open_url(url: &str) -> Result<Connection> {
    match DatabaseLocation::parse(url)? {
        DatabaseLocation::InMemory => open_in_memory(),
        DatabaseLocation::File(path) => open(path),
    }
}

/// Configure a connection for use by the store
pub fn configure(conn: &Connection) -> Result<()> {
    // todos.list_id references lists.id
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite)?;
    Ok(())
}
