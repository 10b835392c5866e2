//! todox store - SQLite persistence for lists and todos
//!
//! Provides:
//! - Connection helpers (`db`) accepting `DATABASE_URL`-style locations
//! - Embedded schema migrations with checksums
//! - `SqliteStore`, the relational implementation of `ListStore`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
